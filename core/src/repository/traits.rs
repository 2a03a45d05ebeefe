use crate::error::LoadError;
use crate::model::raw::RawApiResponse;

/// Somewhere a raw dashboard payload can be fetched from.
pub trait PayloadSource {
    fn fetch(&self) -> Result<RawApiResponse, LoadError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

impl<T: PayloadSource + ?Sized> PayloadSource for Box<T> {
    fn fetch(&self) -> Result<RawApiResponse, LoadError> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
