use interface_filler::{caller_params, CallerParams, Filler};

#[derive(Filler)]
struct Adapter {
    #[filler("read")]
    inner: Vec<u8>,
}

#[caller_params]
impl Adapter {
    fn read(&self, #[by_index(1, from_end)] len: usize, #[by_name] timeout: u64) -> usize {
        self.inner.len() + len + timeout as usize
    }
}

fn main() {
    assert_eq!(Adapter::filler().fields.len(), 1);
    assert_eq!(Adapter::caller_params().methods.len(), 1);
}
