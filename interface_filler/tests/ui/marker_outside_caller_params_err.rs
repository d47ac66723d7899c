struct Adapter;

impl Adapter {
    fn read(&self, #[by_name] timeout: u64) {}
}

fn main() {}
