pub mod post;
pub mod refresh_token;
pub mod user;

pub use post::PostgresPostRepository;
pub use refresh_token::PostgresRefreshTokenRepository;
pub use user::PostgresUserRepository;
