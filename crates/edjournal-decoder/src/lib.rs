// Error types
pub mod error;

// Field access and unit normalization
pub mod fields;
pub mod normalize;

// Envelope extraction
pub mod envelope;

// Enumeration lookups
pub mod resolvers;

// Vehicle resolution against session state
pub mod vehicles;

// Decoder registry and per-kind routines
pub mod context;
mod decoders;
pub mod registry;

// Raw line -> event
pub mod pipeline;

pub use context::{DecodeContext, VehicleRef};
pub use envelope::{Envelope, Extraction, SkipReason, extract};
pub use error::{Error, Result};
pub use fields::{FieldBag, Fields};
pub use pipeline::{JournalDecoder, Outcome};
pub use registry::{DecodeFn, DecoderRegistry, Lookup, Registration};
pub use resolvers::{Resolve, Resolvers};
pub use vehicles::{Fleet, SharedRegistry, VehicleRegistry, resolve_vehicle};
