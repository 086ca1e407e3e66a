//! Compiled-in product data.

use crate::catalog::{Category, Product};
use crate::money::Money;

struct Entry {
    name: &'static str,
    description: &'static str,
    price: i64,
    original_price: Option<i64>,
    category: Category,
    image: &'static str,
}

const PRODUCTS: &[Entry] = &[
    // Gadgets
    Entry {
        name: "Keychain Breathalyzer",
        description: "Portable alcohol tester for your keychain",
        price: 139,
        original_price: Some(199),
        category: Category::Gadgets,
        image: "https://m.media-amazon.com/images/I/71PwjVuN3BL._AC_SL1500_.jpg",
    },
    Entry {
        name: "H3 Tritium Watch",
        description: "Navy Seal tactical watch with tritium illumination",
        price: 1998,
        original_price: Some(2499),
        category: Category::Gadgets,
        image: "https://cdn.watchesyoucanafford.com/wp-content/uploads/2023/08/Affordable-Bronze-Watches-600x400.jpg",
    },
    // Robots
    Entry {
        name: "Self-balancing Robot",
        description: "Autonomous robot that balances on two wheels",
        price: 999,
        original_price: None,
        category: Category::Robots,
        image: "https://hackster.imgix.net/uploads/attachments/1460483/_ihMxXCqSaS.blob?auto=compress%2Cformat&w=900&h=675&fit=min",
    },
    Entry {
        name: "Roboraptor",
        description: "80cm long dinosaur robot with realistic motions",
        price: 499,
        original_price: Some(699),
        category: Category::Robots,
        image: "https://wowmeta.s3.amazonaws.com/img/products-feature/14453147974acde98036a64678a59c8effbf6dafeb.jpg",
    },
    // Electric vehicles
    Entry {
        name: "Electric Fat-bike 1000w",
        description: "Powerful 1000w motor, perfect for snow riding",
        price: 14998,
        original_price: Some(16998),
        category: Category::ElectricVehicles,
        image: "https://aventon-images.imgix.net/products/Aventure2-traditional-slate-01.jpg?v=1755057581&auto=compress,format&w=10&blur=10",
    },
    Entry {
        name: "Electric Porsche-type Car",
        description: "24V/180w motor, for 2 children or small adults",
        price: 8998,
        original_price: None,
        category: Category::ElectricVehicles,
        image: "https://www.magiccars.com/cdn/shop/products/MagicCars2SeaterRideOnBatteryPoweredToyCarAdultsDrive-11_c433e4fb-be28-4f02-af6d-b81aa0b5d341_1000x.jpg?v=1753219330",
    },
    // RC & DIY
    Entry {
        name: "RC Tank w/ Air Cannon",
        description: "Metal 55cm long tank with realistic sounds",
        price: 2998,
        original_price: Some(3498),
        category: Category::RcProducts,
        image: "https://m.media-amazon.com/images/I/7106U9G1H1L._AC_UF894,1000_QL80_.jpg",
    },
    Entry {
        name: "Robot Arm Kit",
        description: "Controllable from RC or PC, build it yourself",
        price: 498,
        original_price: None,
        category: Category::DiyKits,
        image: "https://m.media-amazon.com/images/S/aplus-media-library-service-media/19a61c5b-a63a-418c-acc7-e96b0856a680.__CR0,0,970,600_PT0_SX970_V1___.jpg",
    },
];

pub(super) fn builtin_products() -> impl Iterator<Item = Product> {
    PRODUCTS.iter().map(|entry| {
        let product = Product::new(
            entry.name,
            entry.description,
            Money::nok(entry.price),
            entry.category,
            entry.image,
        );
        match entry.original_price {
            Some(original) => product.with_original_price(Money::nok(original)),
            None => product,
        }
    })
}
