use interface_filler::caller_params;

struct Adapter;

#[caller_params]
impl Adapter {
    fn read(&self, #[by_index] #[by_name] timeout: u64) {}
}

fn main() {}
