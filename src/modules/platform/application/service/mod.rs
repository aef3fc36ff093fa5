mod get_platforms_service;
mod revalidate_platforms_service;

pub use get_platforms_service::{GetPlatformsService, RankedStrategy};
pub use revalidate_platforms_service::RevalidatePlatformsService;
