// Library root
// -----------
// The binary (`main.rs`) wires these modules together; keeping them in a
// library lets tests drive the prompt loop with scripted input.
//
// Module responsibilities:
// - `config`: fixed defaults (where quotes come from, output styling).
// - `quote`: the immutable quote collection and random selection.
// - `ui`: the yes/no prompt and the interactive loop.
pub mod config;
pub mod quote;
pub mod ui;
