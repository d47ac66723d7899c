use interface_filler::caller_params;

struct Adapter;

#[caller_params]
impl Adapter {
    #[by_name]
    fn read(&self, x: u8) -> u8 {
        x
    }
}

fn main() {}
