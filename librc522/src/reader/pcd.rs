// librc522/src/reader/pcd.rs

use crate::Result;
use crate::reader::handle::{Initialized, Reader};
use crate::transport::RegisterLink;

/// Something that can exchange full frames (CRC on) with a selected tag.
///
/// Tag-level protocols such as Ultralight-C authentication only need this,
/// so they can run against the reader or against a scripted tag.
pub trait Pcd {
    /// Send `request` and return the reply with the CRC stripped.
    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>>;
}

impl<L: RegisterLink> Pcd for Reader<L, Initialized> {
    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        Reader::transceive(self, request)
    }
}

impl<P: Pcd + ?Sized> Pcd for &mut P {
    fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(request)
    }
}
