pub mod leaves;
pub mod session;

pub use leaves::{AdminFilter, LeaveService, LeaveState, LeaveStore, ListScope, ListTicket, OperationStatus};
pub use session::Session;
