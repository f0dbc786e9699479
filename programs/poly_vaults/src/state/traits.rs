pub trait Size {
    const SIZE: usize;
}
