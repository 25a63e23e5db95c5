use crate::error::{Error, Result};
use crate::filter::{Codec, decode_params};
use crate::object::Dict;
use crate::object::keys::{IDENTITY, NAME};

/// The `Crypt` filter.
///
/// Decryption itself happens in the document layer, so only the `Identity`
/// crypt filter can be applied here.
pub(crate) struct Crypt;

pub(crate) static CRYPT: Crypt = Crypt;

impl Crypt {
    fn check_identity(&self, dict: &Dict, index: usize) -> Result<()> {
        match decode_params(dict, index).get_name(NAME) {
            None => Ok(()),
            Some(name) if name == IDENTITY => Ok(()),
            Some(name) => Err(Error::codec(
                self.name(),
                format!("unsupported crypt filter {name}"),
            )),
        }
    }
}

impl Codec for Crypt {
    fn name(&self) -> &'static str {
        "Crypt"
    }

    fn decode(&self, encoded: &[u8], dict: &Dict, index: usize) -> Result<Vec<u8>> {
        self.check_identity(dict, index)?;

        Ok(encoded.to_vec())
    }

    fn encode(&self, raw: &[u8], dict: &Dict, index: usize) -> Result<Vec<u8>> {
        self.check_identity(dict, index)?;

        Ok(raw.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::CRYPT;
    use crate::error::Error;
    use crate::filter::Codec;
    use crate::object::keys::{DECODE_PARMS, FILTER, NAME};
    use crate::object::{Dict, Name};

    fn crypt_dict(name: Option<&[u8]>) -> Dict {
        let mut dict = Dict::new();
        dict.set(FILTER, Name::new(b"Crypt"));

        if let Some(name) = name {
            let mut params = Dict::new();
            params.set_name(NAME, name);
            dict.set(DECODE_PARMS, params);
        }

        dict
    }

    #[test]
    fn identity() {
        assert_eq!(CRYPT.decode(b"abc", &crypt_dict(None), 0).unwrap(), b"abc");
        assert_eq!(
            CRYPT.decode(b"abc", &crypt_dict(Some(b"Identity")), 0).unwrap(),
            b"abc"
        );
    }

    #[test]
    fn named_crypt_filter() {
        assert!(matches!(
            CRYPT.decode(b"abc", &crypt_dict(Some(b"StdCF")), 0),
            Err(Error::Codec { filter: "Crypt", .. })
        ));
    }
}
