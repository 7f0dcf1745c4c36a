//! Admin self-registration subsystem.
//!
//! # Data Flow
//! ```text
//! Settings
//!     → registrar.rs (RegistrationConfig: validate, precompute URL)
//!
//! Ready event (any task, any number of times)
//!     → registrar.rs (latch CAS; losers return)
//!     → dto.rs (RegisterDto → JSON)
//!     → transport.rs (single POST, body text back)
//!     → registrar.rs (body == "success"? log + outcome)
//! ```
//!
//! # Design Decisions
//! - At most one attempt per process; no retry, no deregistration
//! - Configuration errors are fatal, delivery errors are logged

pub mod dto;
pub mod error;
pub mod registrar;
pub mod transport;

pub use dto::RegisterDto;
pub use error::{ConfigurationError, RegisterError, TransportError};
pub use registrar::{RegistrationConfig, RegistrationOutcome, Registrar, REGISTER_PATH};
pub use transport::{HttpTransport, Transport};
