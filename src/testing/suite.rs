//! Built-in bobbin test cases
//!
//! Each case starts bobbin on the "simple" line-oriented interface and
//! talks to the emulated machine's BASIC prompt.

use crate::common::Result;
use crate::session::Interact;

use super::case::Registry;

const BANNER: &str = r#"Bobbin "simple" interactive mode"#;
const APPLESOFT_PROMPT: &str = r"\]";
const INTEGER_PROMPT: &str = r">";

const PLUS: &[&str] = &["--iface", "simple", "-m", "plus"];
const ORIGINAL: &[&str] = &["--iface", "simple", "-m", "original"];
const PLUS_CANONICAL: &[&str] = &[
    "--iface",
    "simple",
    "-m",
    "plus",
    "--simple-input",
    "canonical",
];
const BAD_INPUT_MODE: &[&str] = &["--iface", "simple", "--simple-input", "bogus"];

/// All built-in cases, in the order they run
pub fn registry() -> Registry {
    Registry::new()
        .register("applesoft_prompt", PLUS, applesoft_prompt)
        .register("applesoft_print", PLUS, applesoft_print)
        .register("applesoft_string", PLUS, applesoft_string)
        .register("integer_basic_prompt", ORIGINAL, integer_basic_prompt)
        .register("canonical_input", PLUS_CANONICAL, canonical_input)
        .register("ctrl_d_exits", PLUS, ctrl_d_exits)
        .register("bad_input_mode", BAD_INPUT_MODE, bad_input_mode)
}

fn applesoft_prompt(p: &mut dyn Interact) -> Result<bool> {
    p.expect(BANNER)?;
    p.expect(APPLESOFT_PROMPT)?;
    Ok(true)
}

fn applesoft_print(p: &mut dyn Interact) -> Result<bool> {
    p.expect(APPLESOFT_PROMPT)?;
    p.send_line("PRINT 2+3")?;
    p.expect(r"\n5\r?\n")?;
    Ok(true)
}

fn applesoft_string(p: &mut dyn Interact) -> Result<bool> {
    p.expect(APPLESOFT_PROMPT)?;
    p.send_line(r#"PRINT "HELLO""#)?;
    p.expect(r"\nHELLO\r?\n")?;
    // Back at the prompt for the next line
    p.expect(APPLESOFT_PROMPT)?;
    Ok(true)
}

fn integer_basic_prompt(p: &mut dyn Interact) -> Result<bool> {
    p.expect(BANNER)?;
    p.expect(INTEGER_PROMPT)?;
    Ok(true)
}

fn canonical_input(p: &mut dyn Interact) -> Result<bool> {
    p.expect(APPLESOFT_PROMPT)?;
    p.send_line("PRINT 6*7")?;
    p.expect(r"\n42\r?\n")?;
    Ok(true)
}

fn ctrl_d_exits(p: &mut dyn Interact) -> Result<bool> {
    p.expect(APPLESOFT_PROMPT)?;
    p.send_control('d')?;
    p.expect_eof()?;
    Ok(true)
}

fn bad_input_mode(p: &mut dyn Interact) -> Result<bool> {
    p.expect(r#"Unrecognized --simple-input value "bogus""#)?;
    p.expect_eof()?;
    Ok(true)
}
