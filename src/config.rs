use crate::{error::Error, input::Input, Kdf};
use scrypt::Params;

/// A complete derivation setup: cost parameters, key length and whether the
/// `p` segments run on separate threads.
///
/// ```toml
/// [scrypt]
/// log_n = 14        # or n = 16384
/// r = 8
/// p = 1
/// key_length = 256  # bits
/// parallel = false  # optional
/// ```
///
/// Every cost parameter must be given explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KdfConfig {
    params: Params,
    key_len_bits: usize,
    parallel: bool,
}

impl KdfConfig {
    pub fn new(params: Params, key_len_bits: usize) -> Result<Self, Error> {
        crate::key_len_bytes(key_len_bits)?;
        Ok(Self {
            params,
            key_len_bits,
            parallel: false,
        })
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn from_toml_str(document: &str) -> Result<Self, Error> {
        let table = toml::from_str::<toml::value::Table>(document)?;
        let config = TomlConfig::new(table).kdf_config()?;
        tracing::debug!(
            log_n = config.params.log_n(),
            r = config.params.r(),
            p = config.params.p(),
            key_len_bits = config.key_len_bits,
            parallel = config.parallel,
            "loaded scrypt config"
        );
        Ok(config)
    }

    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub const fn key_len_bits(&self) -> usize {
        self.key_len_bits
    }

    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Derives a key of [`KdfConfig::key_len_bits`] bits.
    pub fn derive<'p, 's>(
        &self,
        password: impl Into<Input<'p>>,
        salt: impl Into<Input<'s>>,
    ) -> Result<Vec<u8>, Error> {
        let kdf: Kdf = if self.parallel {
            scrypt::scrypt_parallel
        } else {
            scrypt::scrypt
        };
        crate::derive_with(
            kdf,
            password.into(),
            salt.into(),
            &self.params,
            self.key_len_bits,
        )
    }
}

struct TomlConfig {
    table: toml::value::Table,
}

impl TomlConfig {
    const fn new(table: toml::value::Table) -> Self {
        Self { table }
    }

    // keys live under `[scrypt]` if that table exists, at the top level
    // otherwise
    fn section(&self) -> Result<&toml::value::Table, Error> {
        match self.table.get("scrypt") {
            Some(toml::Value::Table(section)) => Ok(section),
            Some(_) => Err(Error::InvalidField("scrypt")),
            None => Ok(&self.table),
        }
    }

    fn integer(&self, field: &'static str) -> Result<Option<i64>, Error> {
        match self.section()?.get(field) {
            Some(toml::Value::Integer(v)) => Ok(Some(*v)),
            Some(_) => Err(Error::InvalidField(field)),
            None => Ok(None),
        }
    }

    fn required<T: TryFrom<i64>>(&self, field: &'static str) -> Result<T, Error> {
        let v = self.integer(field)?.ok_or(Error::MissingField(field))?;
        T::try_from(v).map_err(|_| Error::InvalidField(field))
    }

    fn n(&self) -> Result<u64, Error> {
        match (self.integer("n")?, self.integer("log_n")?) {
            (Some(n), None) => u64::try_from(n).map_err(|_| Error::InvalidField("n")),
            (None, Some(log_n)) => u32::try_from(log_n)
                .ok()
                .and_then(|log_n| 1_u64.checked_shl(log_n))
                .ok_or(Error::InvalidField("log_n")),
            (Some(_), Some(_)) => Err(Error::InvalidField("log_n")),
            (None, None) => Err(Error::MissingField("n")),
        }
    }

    fn parallel(&self) -> Result<bool, Error> {
        match self.section()?.get("parallel") {
            Some(toml::Value::Boolean(v)) => Ok(*v),
            Some(_) => Err(Error::InvalidField("parallel")),
            None => Ok(false),
        }
    }

    fn kdf_config(&self) -> Result<KdfConfig, Error> {
        let params = Params::new(self.n()?, self.required("r")?, self.required("p")?)?;
        let key_len_bits = self.required("key_length")?;
        Ok(KdfConfig::new(params, key_len_bits)?.parallel(self.parallel()?))
    }
}
