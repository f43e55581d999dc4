use crate::ElementId;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type ElementMap<V> = HashMap<ElementId, V>;
#[cfg(not(feature = "std"))]
pub(crate) type ElementMap<V> = BTreeMap<ElementId, V>;
