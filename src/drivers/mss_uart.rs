//! MSS UART (MMUART) in polled mode.
//!
//! The MMUART is a 16550-style UART on 32-bit register strides with a few
//! MSS extensions: three mode registers (MM0..MM2) and a fractional baud
//! divisor (DFR) in 1/64ths.

use core::fmt;

use tock_registers::{
    fields::FieldValue,
    interfaces::{ReadWriteable, Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite},
};

use super::{common::MmioDerefWrapper, SerialPort};
use crate::hal::Error;

/// Depth of the transmit FIFO.
const TX_FIFO_SIZE: usize = 16;

register_bitfields![
    u32,

    FCR [
        CLEAR_RX_FIFO OFFSET(1) NUMBITS(1) [],
        CLEAR_TX_FIFO OFFSET(2) NUMBITS(1) [],
        RXRDY_TXRDYN_EN OFFSET(3) NUMBITS(1) [],
        RX_TRIGGER OFFSET(6) NUMBITS(2) [
            OneByte = 0b00,
            FourBytes = 0b01,
            EightBytes = 0b10,
            FourteenBytes = 0b11
        ]
    ],

    LCR [
        WLS OFFSET(0) NUMBITS(2) [     // Word length
            FiveBits = 0b00,
            SixBits = 0b01,
            SevenBits = 0b10,
            EightBits = 0b11
        ],
        STB OFFSET(2) NUMBITS(1) [     // Stop bits
            One = 0,
            Two = 1
        ],
        PEN OFFSET(3) NUMBITS(1) [],   // Parity enable
        EPS OFFSET(4) NUMBITS(1) [     // Even parity select
            Odd = 0,
            Even = 1
        ],
        SP OFFSET(5) NUMBITS(1) [],    // Stick parity
        SB OFFSET(6) NUMBITS(1) [],    // Set break
        DLAB OFFSET(7) NUMBITS(1) []   // Divisor latch access
    ],

    MCR [
        LOOP OFFSET(4) NUMBITS(1) [],
        RLOOP OFFSET(5) NUMBITS(2) []
    ],

    LSR [
        DR OFFSET(0) NUMBITS(1) [],
        OE OFFSET(1) NUMBITS(1) [],
        PE OFFSET(2) NUMBITS(1) [],
        FE OFFSET(3) NUMBITS(1) [],
        BI OFFSET(4) NUMBITS(1) [],
        THRE OFFSET(5) NUMBITS(1) [],  // Transmit holding register empty
        TEMT OFFSET(6) NUMBITS(1) [],  // Transmitter empty
        FIER OFFSET(7) NUMBITS(1) []
    ],

    MM0 [
        EFBR OFFSET(7) NUMBITS(1) []   // Fractional baud rate enable
    ]
];

register_structs! {
    RegisterBlock {
        (0x00 => rbr_thr_dlr: ReadWrite<u32>),
        (0x04 => ier_dmr: ReadWrite<u32>),
        (0x08 => fcr: ReadWrite<u32, FCR::Register>),
        (0x0C => lcr: ReadWrite<u32, LCR::Register>),
        (0x10 => mcr: ReadWrite<u32, MCR::Register>),
        (0x14 => lsr: ReadOnly<u32, LSR::Register>),
        (0x18 => _reserved0),
        (0x30 => mm0: ReadWrite<u32, MM0::Register>),
        (0x34 => mm1: ReadWrite<u32>),
        (0x38 => mm2: ReadWrite<u32>),
        (0x3C => dfr: ReadWrite<u32>),
        (0x40 => @END),
    }
}

type Registers = MmioDerefWrapper<RegisterBlock>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    None,
    Odd,
    Even,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopBits {
    One,
    Two,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineConfig {
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
}

impl LineConfig {
    pub const EIGHT_N_ONE: Self = Self {
        data_bits: DataBits::Eight,
        parity: Parity::None,
        stop_bits: StopBits::One,
    };

    fn lcr(self) -> FieldValue<u32, LCR::Register> {
        let wls = match self.data_bits {
            DataBits::Five => LCR::WLS::FiveBits,
            DataBits::Six => LCR::WLS::SixBits,
            DataBits::Seven => LCR::WLS::SevenBits,
            DataBits::Eight => LCR::WLS::EightBits,
        };
        let stb = match self.stop_bits {
            StopBits::One => LCR::STB::One,
            StopBits::Two => LCR::STB::Two,
        };
        let parity = match self.parity {
            Parity::None => LCR::PEN::CLEAR,
            Parity::Odd => LCR::PEN::SET + LCR::EPS::Odd,
            Parity::Even => LCR::PEN::SET + LCR::EPS::Even,
        };
        wls + stb + parity
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UartConfig {
    pub baud: u32,
    pub line: LineConfig,
}

impl UartConfig {
    pub const fn new(baud: u32, line: LineConfig) -> Self {
        Self { baud, line }
    }
}

/// Integer and fractional (1/64) baud divisors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaudDivisors {
    pub integer: u16,
    pub fraction: u8,
}

impl BaudDivisors {
    /// `pclk / (16 * baud)`, the fraction rounded to the nearest 1/64.
    pub fn compute(pclk: u32, baud: u32) -> Result<Self, Error> {
        let out_of_range = Error::BaudRateOutOfRange { pclk, baud };
        if baud == 0 {
            return Err(out_of_range);
        }

        let by_128 = (8 * u64::from(pclk)) / u64::from(baud);
        let by_64 = by_128 / 2;
        let integer = by_64 / 64;
        let mut fraction = by_64 - integer * 64;
        fraction += (by_128 - integer * 128) - fraction * 2;

        let integer = u16::try_from(integer).map_err(|_| out_of_range)?;
        Ok(Self {
            integer,
            fraction: fraction as u8,
        })
    }

    /// The fractional divisor only takes effect above an integer divisor of 1.
    pub fn uses_fraction(&self) -> bool {
        self.integer > 1
    }
}

/// Transmit side of the UART as seen by the polled writer.
trait TxFifo {
    /// The holding register and the whole FIFO are empty.
    fn fifo_empty(&self) -> bool;

    fn push(&self, byte: u8);
}

impl TxFifo for RegisterBlock {
    fn fifo_empty(&self) -> bool {
        self.lsr.is_set(LSR::THRE)
    }

    fn push(&self, byte: u8) {
        self.rbr_thr_dlr.set(u32::from(byte));
    }
}

/// Queue `bytes`, at most one FIFO's worth per observed THRE.
fn transmit<F: TxFifo + ?Sized>(fifo: &F, bytes: &[u8]) {
    let mut pending = bytes;

    while !pending.is_empty() {
        if !fifo.fifo_empty() {
            core::hint::spin_loop();
            continue;
        }

        let (burst, rest) = pending.split_at(pending.len().min(TX_FIFO_SIZE));
        for &byte in burst {
            fifo.push(byte);
        }
        pending = rest;
    }
}

pub struct MssUart {
    registers: Registers,
    pclk: u32,
}

impl MssUart {
    /// # Safety
    /// `base_addr` must point at an MMUART register block whose clock is
    /// (or will be, before `init`) enabled.
    pub const unsafe fn new(base_addr: usize, pclk: u32) -> Self {
        Self {
            registers: Registers::new(base_addr),
            pclk,
        }
    }

    fn set_divisors(&self, divisors: BaudDivisors) {
        self.registers.lcr.modify(LCR::DLAB::SET);
        self.registers.ier_dmr.set(u32::from(divisors.integer >> 8));
        self.registers.rbr_thr_dlr.set(u32::from(divisors.integer & 0xFF));
        self.registers.lcr.modify(LCR::DLAB::CLEAR);

        if divisors.uses_fraction() {
            self.registers.mm0.modify(MM0::EFBR::SET);
            self.registers.dfr.set(u32::from(divisors.fraction));
        } else {
            self.registers.mm0.modify(MM0::EFBR::CLEAR);
        }
    }
}

impl SerialPort for MssUart {
    fn init(&mut self, config: UartConfig) -> Result<(), Error> {
        let divisors = BaudDivisors::compute(self.pclk, config.baud)?;

        // 1. No UART interrupts, this driver polls
        self.registers.ier_dmr.set(0);

        // 2. Flush both FIFOs, single-byte RX trigger
        self.registers.fcr.write(
            FCR::CLEAR_RX_FIFO::SET
                + FCR::CLEAR_TX_FIFO::SET
                + FCR::RXRDY_TXRDYN_EN::SET
                + FCR::RX_TRIGGER::OneByte,
        );

        // 3. Normal operation, no loopback
        self.registers.mcr.modify(MCR::LOOP::CLEAR + MCR::RLOOP::CLEAR);

        // 4. Plain UART mode: no IrDA, LIN, 9-bit or smartcard extensions
        self.registers.mm0.set(0);
        self.registers.mm1.set(0);
        self.registers.mm2.set(0);

        // 5. Baud rate
        self.set_divisors(divisors);

        // 6. Frame format
        self.registers.lcr.write(config.line.lcr());

        Ok(())
    }

    fn polled_tx(&mut self, bytes: &[u8]) {
        transmit(&*self.registers, bytes);
    }
}

impl fmt::Write for MssUart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.polled_tx_string(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};
    use proptest::prelude::*;

    const WORDS: usize = 0x40 / 4;
    const THR: usize = 0x00 / 4;
    const DMR: usize = 0x04 / 4;
    const FCR_WORD: usize = 0x08 / 4;
    const LCR_WORD: usize = 0x0C / 4;
    const LSR_WORD: usize = 0x14 / 4;
    const MM0_WORD: usize = 0x30 / 4;
    const DFR: usize = 0x3C / 4;

    const PCLK: u32 = 150_000_000;

    fn uart(words: &mut [u32; WORDS]) -> MssUart {
        uart_at(words, PCLK)
    }

    fn uart_at(words: &mut [u32; WORDS], pclk: u32) -> MssUart {
        unsafe { MssUart::new(words.as_mut_ptr() as usize, pclk) }
    }

    /// FIFO that reports empty on every `period`-th status read.
    struct SlowFifo {
        period: usize,
        status_reads: Cell<usize>,
        since_empty: Cell<usize>,
        largest_burst: Cell<usize>,
        wire: RefCell<Vec<u8>>,
    }

    impl SlowFifo {
        fn new(period: usize) -> Self {
            Self {
                period,
                status_reads: Cell::new(0),
                since_empty: Cell::new(0),
                largest_burst: Cell::new(0),
                wire: RefCell::new(Vec::new()),
            }
        }
    }

    impl TxFifo for SlowFifo {
        fn fifo_empty(&self) -> bool {
            self.status_reads.set(self.status_reads.get() + 1);
            let empty = self.status_reads.get() % self.period == 0;
            if empty {
                self.since_empty.set(0);
            }
            empty
        }

        fn push(&self, byte: u8) {
            self.since_empty.set(self.since_empty.get() + 1);
            self.largest_burst.set(self.largest_burst.get().max(self.since_empty.get()));
            self.wire.borrow_mut().push(byte);
        }
    }

    #[test]
    fn divisors_for_115200_at_150mhz() {
        assert_eq!(
            BaudDivisors::compute(PCLK, 115_200),
            Ok(BaudDivisors {
                integer: 81,
                fraction: 24
            })
        );
    }

    #[test]
    fn divisor_that_overflows_16_bits_is_rejected() {
        assert_eq!(
            BaudDivisors::compute(PCLK, 100),
            Err(Error::BaudRateOutOfRange {
                pclk: PCLK,
                baud: 100
            })
        );
        assert!(BaudDivisors::compute(PCLK, 0).is_err());
    }

    #[test]
    fn init_programs_8n1_at_115200() {
        let mut words = [0u32; WORDS];
        words[LCR_WORD] = 0xFF;
        let mut port = uart(&mut words);

        assert_eq!(port.init(UartConfig::new(115_200, LineConfig::EIGHT_N_ONE)), Ok(()));

        assert_eq!(words[LCR_WORD], 0x03, "8 data bits, 1 stop, no parity, DLAB clear");
        assert_eq!(words[THR], 81);
        assert_eq!(words[DMR], 0);
        assert_eq!(words[DFR], 24);
        assert_eq!(words[MM0_WORD], 1 << 7);
        assert_eq!(words[FCR_WORD], 0b1110);
    }

    #[test]
    fn parity_and_stop_bits_reach_the_line_control_register() {
        let mut words = [0u32; WORDS];
        let mut port = uart(&mut words);
        let line = LineConfig {
            data_bits: DataBits::Seven,
            parity: Parity::Even,
            stop_bits: StopBits::Two,
        };

        port.init(UartConfig::new(9_600, line)).unwrap();

        assert_eq!(words[LCR_WORD], 0b1_1110);
    }

    #[test]
    fn polled_tx_writes_through_the_holding_register() {
        let mut words = [0u32; WORDS];
        words[LSR_WORD] = 0x60;
        let mut port = uart(&mut words);

        port.polled_tx_string("0123456789abcdefXYZ");

        assert_eq!(words[THR], u32::from(b'Z'));
    }

    #[test]
    fn nothing_is_written_before_thre_and_bursts_fit_the_fifo() {
        let text: Vec<u8> = (0..100u8).map(|i| b'a' + i % 26).collect();
        let fifo = SlowFifo::new(5);

        transmit(&fifo, &text);

        assert_eq!(*fifo.wire.borrow(), text);
        assert_eq!(fifo.largest_burst.get(), TX_FIFO_SIZE);
        // 100 bytes need ceil(100 / 16) = 7 empty-FIFO sightings
        assert_eq!(fifo.status_reads.get(), 7 * 5);
    }

    #[test]
    fn short_writes_go_out_in_one_burst() {
        let fifo = SlowFifo::new(3);

        transmit(&fifo, b"\r\nok\r\n");

        assert_eq!(*fifo.wire.borrow(), b"\r\nok\r\n");
        assert_eq!(fifo.status_reads.get(), 3);
    }

    #[test]
    fn integer_divisor_of_one_disables_the_fractional_divisor() {
        let mut words = [0u32; WORDS];
        words[MM0_WORD] = 1 << 7;
        words[DFR] = 0xAA;
        let mut port = uart_at(&mut words, 16 * 115_200);

        assert_eq!(port.init(UartConfig::new(115_200, LineConfig::EIGHT_N_ONE)), Ok(()));

        assert_eq!(words[THR], 1);
        assert_eq!(words[MM0_WORD] & (1 << 7), 0);
        assert_eq!(words[DFR], 0xAA, "fraction register untouched");
    }

    proptest! {
        #[test]
        fn divisors_approximate_the_requested_rate(
            pclk in 1_000_000u32..=200_000_000,
            baud in 1_200u32..=921_600,
        ) {
            let d = BaudDivisors::compute(pclk, baud).unwrap();
            prop_assert!(d.fraction <= 64);

            // integer + fraction/64 == pclk / (16 * baud), to within 1/64
            let sixty_fourths = u64::from(d.integer) * 64 + u64::from(d.fraction);
            let target = 4 * u64::from(pclk);
            prop_assert!(sixty_fourths * u64::from(baud) <= target + u64::from(baud));
            prop_assert!(sixty_fourths * u64::from(baud) + u64::from(baud) >= target);
        }
    }
}
