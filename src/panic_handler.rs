use core::fmt::Write;
use core::panic::PanicInfo;

use riscv::register::{mcause, mepc, mhartid, mtval};

use mpfs_bringup::config::{board, SETTINGS};
use mpfs_bringup::drivers::{mss_uart::MssUart, put_dec, put_hex, SerialPort};
use mpfs_bringup::hal::{cpu, HartId};

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    cpu::disable_interrupts();

    // Report on the console of the panicking hart
    let base = match HartId::try_from(mhartid::read()) {
        Ok(HartId::U54_1) => board::MMUART1_LO_BASE,
        _ => board::MMUART0_LO_BASE,
    };
    let mut uart = unsafe { MssUart::new(base, SETTINGS.mss_apb_ahb_clk) };

    uart.polled_tx_string("\r\n=== PANIC ===\r\n");

    if let Some(location) = info.location() {
        uart.polled_tx_string("File: "); uart.polled_tx_string(location.file()); uart.polled_tx_string("\r\n");
        uart.polled_tx_string("Line: "); put_dec(&mut uart, location.line() as usize); uart.polled_tx_string("\r\n");
    }
    let _ = write!(uart, "{}\r\n", info.message());

    uart.polled_tx_string("Hart: "); put_dec(&mut uart, mhartid::read()); uart.polled_tx_string("\r\n");

    let cause = mcause::read();
    uart.polled_tx_string("Raw mcause bits: 0x"); put_hex(&mut uart, cause.bits()); uart.polled_tx_string("\r\n");

    match cause.cause() {
        mcause::Trap::Exception(code) => {
            uart.polled_tx_string("Cause: Exception (code "); put_dec(&mut uart, code as usize); uart.polled_tx_string(")\r\n");
            match code {
                0  => uart.polled_tx_string("Instruction address misaligned\r\n"),
                1  => uart.polled_tx_string("Instruction access fault\r\n"),
                2  => uart.polled_tx_string("Illegal instruction\r\n"),
                3  => uart.polled_tx_string("Breakpoint\r\n"),
                4  => uart.polled_tx_string("Load address misaligned\r\n"),
                5  => uart.polled_tx_string("Load access fault\r\n"),
                6  => uart.polled_tx_string("Store/AMO address misaligned\r\n"),
                7  => uart.polled_tx_string("Store/AMO access fault\r\n"),
                11 => uart.polled_tx_string("Environment call from M-mode\r\n"),
                _  => uart.polled_tx_string("Other Exception\r\n"),
            }
        }
        mcause::Trap::Interrupt(code) => {
            uart.polled_tx_string("Cause: Interrupt (code "); put_dec(&mut uart, code as usize); uart.polled_tx_string(")\r\n");
            match code {
                3  => uart.polled_tx_string("Machine Software Interrupt\r\n"),
                7  => uart.polled_tx_string("Machine Timer Interrupt\r\n"),
                11 => uart.polled_tx_string("Machine External Interrupt\r\n"),
                _  => uart.polled_tx_string("Other Interrupt\r\n"),
            }
        }
    }

    uart.polled_tx_string("mepc (PC): 0x"); put_hex(&mut uart, mepc::read()); uart.polled_tx_string("\r\n");
    uart.polled_tx_string("mtval    : 0x"); put_hex(&mut uart, mtval::read()); uart.polled_tx_string("\r\n");

    loop { core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst); }
}
