use gs1_128::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

const SCALE: u32 = 1;
const HEIGHT: u32 = 8;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gs1_128=info")))
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    let input = std::env::args().nth(1)
        .unwrap_or_else(|| "(01)09501101530003(17)250101(10)12345".to_owned());

    let barcode = Gs1Encoder::gs1().encode_str(&input)?;
    let render = barcode.render(barcode.module_count() as u32 * SCALE, HEIGHT)?;

    let mut storage = vec![false; (render.width() * render.height()) as usize];
    render.fill_bits(&mut storage);

    for row in storage.chunks(render.width() as usize) {
        for &on in row {
            print!("{}", if on { BLACK } else { WHITE });
        }
        println!();
    }
    println!("\x1B[0m{input}");
    println!("symbols: {:?}", barcode.symbols());

    Ok(())
}
