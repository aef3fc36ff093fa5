mod get_platforms;
mod revalidate_platforms;

pub use get_platforms::GetPlatformsUseCase;
pub use revalidate_platforms::{RevalidatePlatformsError, RevalidatePlatformsUseCase, Revalidated};
