use std::sync::Arc;

use crate::modules::platform::application::ports::incoming::use_cases::{
    GetPlatformsUseCase, RevalidatePlatformsUseCase,
};

#[derive(Clone)]
pub struct PlatformUseCases {
    pub get: Arc<dyn GetPlatformsUseCase + Send + Sync>,
    pub revalidate: Arc<dyn RevalidatePlatformsUseCase + Send + Sync>,
}
