#![cfg(test)]
use creational_common::DemoError;
use creational_core::demos;
use creational_core::factory_method::{RedRoseGarden, RoseGarden, YellowRoseGarden};

fn create_then_say(garden: &mut dyn RoseGarden) -> String {
    garden.create_rose();
    let mut buf: Vec<u8> = Vec::new();
    garden.say_color(&mut buf).expect("garden was planted");
    String::from_utf8(buf).expect("rose colours are ASCII")
}

#[test]
fn yellow_then_red_gardens_end_to_end() {
    let mut yellow = YellowRoseGarden::new();
    assert_eq!(create_then_say(&mut yellow), "I am a Yellow rose\n");

    let mut red = RedRoseGarden::new();
    assert_eq!(create_then_say(&mut red), "I am a Red rose\n");
}

/// Planting a red garden first must not change what a yellow one grows.
#[test]
fn yellow_garden_ignores_other_instances() {
    let mut gardens: Vec<Box<dyn RoseGarden>> = vec![
        Box::new(RedRoseGarden::new()),
        Box::new(RedRoseGarden::new()),
    ];
    for garden in gardens.iter_mut() {
        garden.create_rose();
    }

    let mut yellow: Box<dyn RoseGarden> = Box::new(YellowRoseGarden::new());
    assert_eq!(create_then_say(yellow.as_mut()), "I am a Yellow rose\n");
}

#[test]
fn saying_color_before_planting_fails() {
    let garden = YellowRoseGarden::new();
    let mut buf: Vec<u8> = Vec::new();

    match garden.say_color(&mut buf) {
        Err(DemoError::NothingPlanted) => {}
        other => panic!("expected NothingPlanted, got {other:?}"),
    }
}

/// The default run with no arguments.
#[test]
fn default_rose_output() {
    let mut buf: Vec<u8> = Vec::new();
    demos::roses(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "I am a Yellow rose\nI am a Red rose\n"
    );
}

#[test]
fn flower_variation_output() {
    let mut buf: Vec<u8> = Vec::new();
    demos::flowers(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Variation 1: every flower has a flower specific fertiliser\n\
         I am a tulip and I use tulip fertiliser\n\
         I am a rose and I use rose fertiliser\n\
         I am a tulip and I use tulip fertiliser\n\
         I am a rose and I use rose fertiliser\n"
    );
}

#[test]
fn tree_variation_output() {
    let mut buf: Vec<u8> = Vec::new();
    demos::trees(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Variation 3: Parameterisation allows fertilisers to be 'mixed and matched'\n\
         I am a fir and I use fir fertiliser\n\
         I am a fir and I use pine fertiliser\n\
         I am a fir and I use organic fertiliser (for firs only)\n\
         I am a fir and I use general fertiliser\n\
         I am a pine and I use pine fertiliser\n\
         I am a pine and I use fir fertiliser\n\
         I am a pine and I use general fertiliser\n\
         I am a pine and I use general fertiliser\n"
    );
}

#[test]
fn shrub_variation_output() {
    let mut buf: Vec<u8> = Vec::new();
    demos::shrubs(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Variation 2: Some shrubs can use general fertiliser\n\
         I am a hybiscus and I use hybiscus fertiliser\n\
         I am a privet and I use general fertiliser\n"
    );
}

/// All three variations in one run, as the fertiliser walkthrough prints them.
#[test]
fn all_variations_output() {
    let mut buf: Vec<u8> = Vec::new();
    demos::variations(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Variation 1: every flower has a flower specific fertiliser\n\
         I am a tulip and I use tulip fertiliser\n\
         I am a rose and I use rose fertiliser\n\
         I am a tulip and I use tulip fertiliser\n\
         I am a rose and I use rose fertiliser\n\
         \n\
         Variation 2: Some shrubs can use general fertiliser\n\
         I am a hybiscus and I use hybiscus fertiliser\n\
         I am a privet and I use general fertiliser\n\
         \n\
         Variation 3: Parameterisation allows fertilisers to be 'mixed and matched'\n\
         I am a fir and I use fir fertiliser\n\
         I am a fir and I use pine fertiliser\n\
         I am a fir and I use organic fertiliser (for firs only)\n\
         I am a fir and I use general fertiliser\n\
         I am a pine and I use pine fertiliser\n\
         I am a pine and I use fir fertiliser\n\
         I am a pine and I use general fertiliser\n\
         I am a pine and I use general fertiliser\n"
    );
}
