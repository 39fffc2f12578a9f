mod bitcoin;

pub(crate) use bitcoin::*;
