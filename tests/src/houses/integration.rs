#![cfg(test)]
use creational_common::config::Config;
use creational_core::abstract_factory::{
    ApplianceFactory, Brand, House, SamsungFactory, WhirlpoolFactory,
};
use creational_core::demos;

fn show(house: &House) -> String {
    let mut buf: Vec<u8> = Vec::new();
    house
        .show_appliances(&mut buf)
        .expect("writing to a Vec never fails");
    String::from_utf8(buf).expect("appliance labels are ASCII")
}

/// A Samsung house lists exactly two lines, washing machine first.
#[test]
fn samsung_house_end_to_end() {
    let factory: Box<dyn ApplianceFactory> = Box::new(SamsungFactory);
    let house: House = House::new(factory.as_ref());

    assert_eq!(
        show(&house),
        "This house has a Samsung Washing Machine\nThis house has a Samsung Fridge\n"
    );
}

#[test]
fn whirlpool_house_end_to_end() {
    let factory: Box<dyn ApplianceFactory> = Box::new(WhirlpoolFactory);
    let house: House = House::new(factory.as_ref());

    assert_eq!(
        show(&house),
        "This house has a Whirlpool Washing Machine\nThis house has a Whirlpool Fridge\n"
    );
}

#[test]
fn every_factory_product_matches_its_brand() {
    let cases: [(Brand, &str, &str); 2] = [
        (
            Brand::Samsung,
            "This house has a Samsung Fridge",
            "This house has a Samsung Washing Machine",
        ),
        (
            Brand::Whirlpool,
            "This house has a Whirlpool Fridge",
            "This house has a Whirlpool Washing Machine",
        ),
    ];

    for (brand, fridge, washing_machine) in cases {
        let factory = brand.factory();
        assert_eq!(factory.fridge().describe(), fridge);
        assert_eq!(factory.washing_machine().describe(), washing_machine);
    }
}

#[test]
fn showing_appliances_twice_is_identical() {
    let house = House::new(&SamsungFactory);
    let first = show(&house);
    let second = show(&house);
    assert_eq!(first, second, "second tour differed from the first");
}

/// The default run with no arguments.
#[test]
fn default_house_tour_output() {
    let mut buf: Vec<u8> = Vec::new();
    demos::houses(&Brand::ALL, &Config::default(), &mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "This house has a Samsung Washing Machine\n\
         This house has a Samsung Fridge\n\
         \n\
         This house has a Whirlpool Washing Machine\n\
         This house has a Whirlpool Fridge\n\
         \n"
    );
}
