pub(crate) mod xml;
pub(crate) mod zip;

pub(crate) type WriterResult<T> = std::io::Result<T>;
