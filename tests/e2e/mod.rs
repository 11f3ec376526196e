// End-to-end tests for the text-to-speech command
//
// Cloud providers run against httpmock servers, the `say`, `ffmpeg` and
// `aws` tools are replaced by shell scripts written into a temporary
// directory, and the binary itself is exercised for its exit codes.
//
// Tests that start external processes are marked #[serial] so that writing
// a fake tool never races with another test forking.

mod helpers;
mod test_amazon;
mod test_cli;
mod test_elevenlabs;
