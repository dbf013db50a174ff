use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    AddPictureUseCase, CreateUserUseCase, GetUserByUsernameUseCase, GetUserUseCase,
    PictureUrlUseCase, SoftDeleteUserUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub get_by_username: Arc<dyn GetUserByUsernameUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn SoftDeleteUserUseCase + Send + Sync>,
    pub picture_url: Arc<dyn PictureUrlUseCase + Send + Sync>,
    pub add_picture: Arc<dyn AddPictureUseCase + Send + Sync>,
}
