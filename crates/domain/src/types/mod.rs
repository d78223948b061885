//! Domain types and models

pub mod avatar;
pub mod calculator;
pub mod identity;
pub mod responses;
pub mod tariff;
pub mod user;

pub use avatar::AvatarUpload;
pub use calculator::CalculatorId;
pub use identity::TelegramIdentity;
pub use responses::{
    AiInterpretationResponse, AuthResponse, BirthDateRequest, CalculatorResponse,
    DigitInterpretations, LoginRequest, MatrixImageResponse, RegisterRequest,
    VerifyEmailRequest,
};
pub use tariff::Tariff;
pub use user::{ProfileUpdate, UserProfile};
