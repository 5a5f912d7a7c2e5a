pub(crate) mod counter;
pub(crate) mod migrate;
pub(crate) mod preview;
pub(crate) mod series;
