use embedded_hal_async::i2c::{I2c, SevenBitAddress};

/// Register-addressed access to a device on a shared bus.
///
/// Both calls report how many payload bytes were actually transferred, the driver
/// treats any count other than the requested one as a failed transaction.
#[allow(async_fn_in_trait)]
pub trait RegisterTransport {
    type Error;

    async fn write_registers(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        bytes: &[u8],
    ) -> Result<usize, Self::Error>;

    async fn read_registers(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error>;
}

/// Largest payload [`I2cTransport`] frames into one write
pub const MAX_WRITE_LEN: usize = 16;

/// [`RegisterTransport`] on top of an `embedded-hal-async` I2C bus
pub struct I2cTransport<T> {
    dev: T,
}

impl<T> I2cTransport<T> {
    pub fn new(dev: T) -> Self {
        Self { dev }
    }

    pub fn release(self) -> T {
        self.dev
    }
}

impl<T> RegisterTransport for I2cTransport<T>
where
    T: I2c,
{
    type Error = T::Error;

    async fn write_registers(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        bytes: &[u8],
    ) -> Result<usize, Self::Error> {
        let len = bytes.len().min(MAX_WRITE_LEN);

        let mut frame = [0; MAX_WRITE_LEN + 1];
        frame[0] = register;
        frame[1..=len].copy_from_slice(&bytes[..len]);

        self.dev.write(address, &frame[..=len]).await?;

        Ok(len)
    }

    async fn read_registers(
        &mut self,
        address: SevenBitAddress,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.dev.write_read(address, &[register], buf).await?;

        Ok(buf.len())
    }
}
