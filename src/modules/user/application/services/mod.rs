mod add_picture_service;
mod create_user_service;
mod get_user_service;
mod picture_url_service;
mod soft_delete_user_service;

pub use add_picture_service::AddPictureService;
pub use create_user_service::CreateUserService;
pub use get_user_service::GetUserService;
pub use picture_url_service::PictureUrlService;
pub use soft_delete_user_service::SoftDeleteUserService;
