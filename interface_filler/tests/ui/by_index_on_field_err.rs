use interface_filler::Filler;

#[derive(Filler)]
struct Adapter {
    #[filler]
    inner: Vec<u8>,
    #[by_index(1)]
    len: usize,
}

fn main() {}
