use rug::Integer;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartitionError {
    /// The final enclosure of the Rademacher series did not isolate a single
    /// integer. With a correct term count and tail bound this cannot happen;
    /// no value is returned since it could not be certified exact.
    #[error("p({n}) could not be certified: enclosure {enclosure} does not contain exactly one integer")]
    NotUnique { n: Integer, enclosure: String },
}
