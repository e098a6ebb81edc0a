#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use mpfs_bringup::config::board::HART_COUNT;
use mpfs_bringup::drivers::{SerialPort, UartConfig};
use mpfs_bringup::hal::{ClockReset, Error, Hart, HartId, Peripheral, PeripheralState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    ReadHartId,
    ClearSoftInterrupt,
    EnableSoftInterrupt,
    RaiseSoftInterrupt(HartId),
    EnableIrq,
    ClockReset(Peripheral, PeripheralState),
    UartInit(UartConfig),
    Tx(Vec<u8>),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

/// Records every hardware access in one shared, ordered log.
pub struct Board {
    pub log: Log,
}

impl Board {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn hart(&self, id: HartId) -> ModelHart {
        ModelHart {
            id,
            msip: [false; HART_COUNT],
            pending_at_enable: None,
            log: Rc::clone(&self.log),
        }
    }

    pub fn clocks(&self) -> ModelClocks {
        ModelClocks {
            fail_on: None,
            log: Rc::clone(&self.log),
        }
    }

    pub fn uart(&self) -> ModelUart {
        ModelUart {
            log: Rc::clone(&self.log),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn position(&self, wanted: &Event) -> Option<usize> {
        self.log.borrow().iter().position(|e| e == wanted)
    }

    /// Bytes sent on the UART, in order.
    pub fn wire(&self) -> Vec<u8> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Tx(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

/// A hart plus a model of the CLINT MSIP words.
pub struct ModelHart {
    pub id: HartId,
    pub msip: [bool; HART_COUNT],
    /// This hart's MSIP at the moment `enable_irq` was called.
    pub pending_at_enable: Option<bool>,
    log: Log,
}

impl Hart for ModelHart {
    fn hart_id(&self) -> usize {
        self.log.borrow_mut().push(Event::ReadHartId);
        self.id.index()
    }

    fn clear_soft_interrupt(&mut self) {
        self.msip[self.id.index()] = false;
        self.log.borrow_mut().push(Event::ClearSoftInterrupt);
    }

    fn enable_soft_interrupt(&mut self) {
        self.log.borrow_mut().push(Event::EnableSoftInterrupt);
    }

    fn raise_soft_interrupt(&mut self, target: HartId) {
        self.msip[target.index()] = true;
        self.log.borrow_mut().push(Event::RaiseSoftInterrupt(target));
    }

    fn enable_irq(&mut self) {
        self.pending_at_enable = Some(self.msip[self.id.index()]);
        self.log.borrow_mut().push(Event::EnableIrq);
    }
}

pub struct ModelClocks {
    pub fail_on: Option<Peripheral>,
    log: Log,
}

impl ClockReset for ModelClocks {
    fn config_clk_rst(&mut self, periph: Peripheral, state: PeripheralState) -> Result<(), Error> {
        self.log.borrow_mut().push(Event::ClockReset(periph, state));
        if self.fail_on == Some(periph) {
            return Err(Error::ResetNotReleased(periph));
        }
        Ok(())
    }
}

pub struct ModelUart {
    log: Log,
}

impl SerialPort for ModelUart {
    fn init(&mut self, config: UartConfig) -> Result<(), Error> {
        self.log.borrow_mut().push(Event::UartInit(config));
        Ok(())
    }

    fn polled_tx(&mut self, bytes: &[u8]) {
        self.log.borrow_mut().push(Event::Tx(bytes.to_vec()));
    }
}
