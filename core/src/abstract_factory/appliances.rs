/// A fridge, as far as a house tour is concerned.
pub trait Fridge {
    fn describe(&self) -> &'static str;
}

/// A washing machine, as far as a house tour is concerned.
pub trait WashingMachine {
    fn describe(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SamsungFridge;

#[derive(Debug, Clone, Copy, Default)]
pub struct WhirlpoolFridge;

#[derive(Debug, Clone, Copy, Default)]
pub struct SamsungWashingMachine;

#[derive(Debug, Clone, Copy, Default)]
pub struct WhirlpoolWashingMachine;

impl Fridge for SamsungFridge {
    fn describe(&self) -> &'static str {
        "This house has a Samsung Fridge"
    }
}

impl Fridge for WhirlpoolFridge {
    fn describe(&self) -> &'static str {
        "This house has a Whirlpool Fridge"
    }
}

impl WashingMachine for SamsungWashingMachine {
    fn describe(&self) -> &'static str {
        "This house has a Samsung Washing Machine"
    }
}

impl WashingMachine for WhirlpoolWashingMachine {
    fn describe(&self) -> &'static str {
        "This house has a Whirlpool Washing Machine"
    }
}
