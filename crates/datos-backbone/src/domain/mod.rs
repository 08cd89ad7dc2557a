pub(crate) mod dato;
