mod get_platforms;
mod revalidate_platforms;

pub use get_platforms::{
    __path_get_movie_platforms_handler, __path_get_tv_platforms_handler,
    get_movie_platforms_handler, get_tv_platforms_handler, PlatformsResponse,
};
pub use revalidate_platforms::{
    __path_revalidate_movie_platforms_handler, __path_revalidate_tv_platforms_handler,
    revalidate_movie_platforms_handler, revalidate_tv_platforms_handler,
};
