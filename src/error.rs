use crate::register_map::RegisterMap;

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transfer itself failed
    Transport(E),
    /// `WHO_AM_I` returned something other than the FXOS8700CQ identity
    UnexpectedIdentity(u8),
    ShortRead {
        expected: usize,
        actual: usize,
    },
    ShortWrite {
        register: RegisterMap,
        expected: usize,
        actual: usize,
    },
    /// `configure` called before the device was identified
    NotIdentified,
    /// Samples requested before the configuration sequence completed
    NotConfigured,
}
