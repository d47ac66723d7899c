use interface_filler::caller_params;

struct Adapter;

#[caller_params]
impl Adapter {
    fn read(&self, #[filler] len: usize) {}
}

fn main() {}
