mod add_picture_use_case;
mod create_user_use_case;
mod get_user_use_case;
mod picture_url_use_case;
mod soft_delete_user_use_case;

pub use add_picture_use_case::{AddPictureError, AddPictureUseCase};
pub use create_user_use_case::{
    CreateUserCommand, CreateUserCommandError, CreateUserError, CreateUserUseCase,
};
pub use get_user_use_case::{GetUserByUsernameUseCase, GetUserError, GetUserUseCase};
pub use picture_url_use_case::{PictureUrlError, PictureUrlUseCase};
pub use soft_delete_user_use_case::{SoftDeleteUserError, SoftDeleteUserUseCase};
