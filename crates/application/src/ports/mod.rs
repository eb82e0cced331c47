//! Ports (interfaces) to the stage services
//!
//! Each stage is reached through a typed request/response trait. The
//! transport behind a port is irrelevant to the orchestrators: an
//! in-process adapter, an RPC stub, and a test mock all satisfy the
//! same contract. A stage signals an injected failure by returning an
//! error value, never by panicking.

mod delivery_port;
mod packaging_port;
mod printing_port;
mod styling_port;

pub use delivery_port::DeliveryPort;
pub use packaging_port::PackagingPort;
pub use printing_port::PrintingPort;
pub use styling_port::StylingPort;

#[cfg(test)]
pub use delivery_port::MockDeliveryPort;
#[cfg(test)]
pub use packaging_port::MockPackagingPort;
#[cfg(test)]
pub use printing_port::MockPrintingPort;
#[cfg(test)]
pub use styling_port::MockStylingPort;
