/// Player-facing output.
///
/// Two channels, same as the wire protocol split of a real server: `line`
/// carries in-world text, `system` carries engine prompts. Both print to
/// stdout here; the split keeps call sites honest about which is which.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output;

impl Output {
    pub fn line(&self, s: impl AsRef<str>) {
        println!("{}", s.as_ref());
    }

    pub fn system(&self, s: impl AsRef<str>) {
        println!("{}", s.as_ref());
    }

    pub fn blank(&self) {
        println!();
    }
}
