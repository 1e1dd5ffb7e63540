#[derive(Clone, Debug)]
pub enum Msg {
    /// A filter chip was clicked; the index is its position among the chips.
    ActivateChip(usize),
    OpenParcel(&'static str),
}
