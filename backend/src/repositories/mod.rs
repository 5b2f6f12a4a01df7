pub mod leave_request;
pub mod repository;
pub mod user;

pub use leave_request::InMemoryLeaveRequestRepository;
pub use repository::{LeaveRequestRepositoryTrait, UserRepositoryTrait};
pub use user::InMemoryUserRepository;
