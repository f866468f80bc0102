use trafmt_units::address::MacCodec;
use trafmt_units::position::{GeoCodec, LatLong};
use trafmt_units::units::length::ShortLength;
use trafmt_units::units::speed::SpeedUnit;
use trafmt_units::units::UnitConverter;

fn main() {
    println!("=== Unit resolution and conversion ===\n");

    let speed_unit = SpeedUnit::resolve("mph").expect("known key");
    println!("60 {} = {} kph", speed_unit, speed_unit.to_metric(60.0));

    // Aliases resolve to the same variant as the canonical name
    let feet = ShortLength::resolve("ft").expect("known alias");
    println!("18 {} = {} m", feet, feet.to_metric(18.0));

    println!("\n=== Station identity ===\n");

    let mac = MacCodec::from_key("mac17")
        .expect("known key")
        .parse("00:1B:44:11:3A:B7")
        .expect("well-formed address");
    println!("station: {mac} (raw {:#014x}, oui {:#08x})", mac.raw(), mac.oui());

    println!("\n=== Position codec ===\n");

    let codec = GeoCodec::from_key("llh").expect("known key");
    let mut position = LatLong::new();
    codec
        .parse(&[Some("45.5017"), Some("-73.5673"), Some("36")], &mut position)
        .expect("well-formed fields");
    println!("parsed: {position:?}");

    let fields = codec.format(&position).expect("bounded output");
    println!("re-emitted: [{}, {}, {}]", fields[0], fields[1], fields[2]);

    // The Plus Code variant refuses to run instead of zeroing the record
    let olc = GeoCodec::from_key("olc").expect("known key");
    match olc.parse(&[Some("8FVC2222+22")], &mut position) {
        Err(err) => println!("olc: {err}"),
        Ok(()) => unreachable!(),
    }

    println!("\n✅ Quickstart completed");
}
