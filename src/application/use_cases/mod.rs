//! Use Cases
//!
//! One orchestrator per forum operation. Each holds its repository
//! dependencies behind `Arc`ed trait bounds (constructor injection) and runs
//! its steps strictly in sequence: a failing guard aborts the remainder, so
//! no mutation happens before every check has passed.

mod add_comment;
mod add_thread;
mod delete_comment;
mod detail_thread;

pub use add_comment::AddCommentUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use detail_thread::DetailThreadUseCase;
