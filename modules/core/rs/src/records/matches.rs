use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// A genetic relative reported by a DNA-testing service.
///
/// Names are unique within a dataset (see [`crate::normalize`]), the country is the declared
/// birthplace of the relative and `shared_cm` is the total amount of shared DNA in centiMorgans.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Clone, PartialEq, Debug, Constructor, Dissolve, Getters)]
pub struct Match {
    name: String,
    country: String,
    shared_cm: f64,
}
