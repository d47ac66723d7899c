use interface_filler::caller_params;

struct Adapter;

#[caller_params]
impl Adapter {
    fn read(&self, #[by_index] len: usize) -> usize {
        len
    }
}

#[caller_params]
impl Adapter {
    fn write(&self, #[by_name] timeout: u64) -> u64 {
        timeout
    }
}

fn main() {}
