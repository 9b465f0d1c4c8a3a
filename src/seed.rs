//! Demo data for a fresh database.
//!
//! Every step counts its table first and only inserts into an empty table, so
//! running the seeder on every startup is safe. Fixture foreign keys are
//! literal ids and assume parent tables were seeded into fresh sequences.

use std::fmt;

use sea_orm::{ActiveValue::NotSet, ConnectionTrait, EntityTrait, PaginatorTrait, Set};

use crate::{
    entity::{
        Banners, Brands, Categories, Colors, ProductConfigurations, ProductItems, Products, Users,
        VariationOptions, Variations, banners, brands, categories, colors,
        product_configurations, product_items, products, users, variation_options, variations,
    },
    error::AppResult,
    models::ROLE_ADMIN,
    services::auth_service::hash_password,
};

pub const ADMIN_EMAIL: &str = "abduqodiir@gmail.com";
pub const ADMIN_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(u64),
    AlreadySeeded,
    /// A table the fixtures reference has no rows.
    MissingParent(&'static str),
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::Inserted(n) => write!(f, "inserted {n}"),
            SeedOutcome::AlreadySeeded => write!(f, "already seeded"),
            SeedOutcome::MissingParent(table) => write!(f, "skipped, {table} is empty"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub steps: Vec<(&'static str, SeedOutcome)>,
}

impl SeedReport {
    fn push(&mut self, table: &'static str, outcome: SeedOutcome) {
        match outcome {
            SeedOutcome::MissingParent(parent) => {
                tracing::warn!(table, parent, "seed skipped, parent table is empty")
            }
            _ => tracing::info!(table, outcome = %outcome, "seed step"),
        }
        self.steps.push((table, outcome));
    }

    pub fn outcome(&self, table: &str) -> Option<SeedOutcome> {
        self.steps
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, outcome)| *outcome)
    }

    pub fn inserted(&self) -> u64 {
        self.steps
            .iter()
            .map(|(_, outcome)| match outcome {
                SeedOutcome::Inserted(n) => *n,
                _ => 0,
            })
            .sum()
    }
}

/// Seeds every table in dependency order.
pub async fn seed_all<C: ConnectionTrait>(db: &C) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();
    report.push("users", seed_users(db).await?);
    report.push("categories", seed_categories(db).await?);
    report.push("brands", seed_brands(db).await?);
    report.push("colors", seed_colors(db).await?);
    report.push("products", seed_products(db).await?);
    report.push("banners", seed_banners(db).await?);
    report.push("product_items", seed_product_items(db).await?);
    report.push("variations", seed_variations(db).await?);
    report.push("variation_options", seed_variation_options(db).await?);
    report.push("product_configurations", seed_product_configurations(db).await?);
    tracing::info!(inserted = report.inserted(), "seeding finished");
    Ok(report)
}

pub async fn seed_users<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if Users::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let password_hash = hash_password(ADMIN_PASSWORD)?;
    let admin = users::ActiveModel {
        id: NotSet,
        fullname: Set("Abduqodir Team Lead".to_string()),
        email: Set(ADMIN_EMAIL.to_string()),
        phone_number: Set(Some("+998884891727".to_string())),
        image: Set(Some(
            "/ahmad_aka.jpg_6f5b92c6-44a8-47ae-9101-972a2c8982b4.jpg".to_string(),
        )),
        password_hash: Set(password_hash),
        is_verified: Set(true),
        role: Set(ROLE_ADMIN.to_string()),
        created_at: NotSet,
    };
    Users::insert(admin).exec(db).await?;
    Ok(SeedOutcome::Inserted(1))
}

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Kiryuvish mashinalari", "/kiryuvish_mashinasi.png", "/kiryuvish_mashinasi.svg"),
    ("Noutbuklar", "/noutbuklar.png", "/noutbuklar.svg"),
    ("Televizorlar", "/televizor.png", "/televizor.svg"),
    ("Muzlatkichlar", "/muzlakich.png", "/muzlakich.svg"),
    ("Konditsiyonerlar", "/konditsiyoner.png", "/konditsiyoner.svg"),
    ("Smartfonlar", "/smartfonlar.png", "/smartfonlar.svg"),
    ("Chang yutkichlar", "/changyutkich.jpg", "/changyutkich.svg"),
];

pub async fn seed_categories<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if Categories::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let rows = CATEGORIES.iter().map(|(name, image, icon)| categories::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        image: Set(Some(image.to_string())),
        icon: Set(Some(icon.to_string())),
        created_at: NotSet,
    });
    Categories::insert_many(rows).exec(db).await?;
    Ok(SeedOutcome::Inserted(CATEGORIES.len() as u64))
}

const BRANDS: &[(&str, &str)] = &[
    ("Artel", "/artel.png"),
    ("Samsung", "/samsung_brand.png"),
    ("Nokia", "/nokia.png"),
    ("Mi", "/mi.png"),
    ("Apple", "/apple.png"),
    ("Vivo", "/vivo.png"),
    ("Huwavei", "/huwavei.png"),
];

pub async fn seed_brands<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if Brands::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let rows = BRANDS.iter().map(|(name, image)| brands::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        image: Set(Some(image.to_string())),
        created_at: NotSet,
    });
    Brands::insert_many(rows).exec(db).await?;
    Ok(SeedOutcome::Inserted(BRANDS.len() as u64))
}

const COLORS: &[(&str, &str)] = &[
    ("Red", "#FF0000"),
    ("Blue", "#0000FF"),
    ("Green", "#008000"),
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
];

pub async fn seed_colors<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if Colors::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let rows = COLORS.iter().map(|(name, code)| colors::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        color_code: Set(code.to_string()),
        created_at: NotSet,
    });
    Colors::insert_many(rows).exec(db).await?;
    Ok(SeedOutcome::Inserted(COLORS.len() as u64))
}

struct ProductFixture {
    name: &'static str,
    category_id: i32,
    brand_id: i32,
    description: &'static str,
    summary: &'static str,
    nasiya: &'static str,
    price: i64,
    rating: i32,
    is_aksiya: bool,
    image: &'static str,
}

const PRODUCTS: &[ProductFixture] = &[
    ProductFixture {
        name: "Смартфон Xiaomi 12 Lite 8/128Gb Қора kamera 48/68 px",
        category_id: 2,
        brand_id: 4,
        description: "Xiaomi 12 Lite – zamonaviy dizayn va kuchli kameraga ega smartfon.",
        summary: "Engil va kuchli smartfon, 120Hz AMOLED displey bilan.",
        nasiya: "6 oy",
        price: 6999,
        rating: 5,
        is_aksiya: true,
        image: "/xiamo12lite.png",
    },
    ProductFixture {
        name: "Samsung Galaxy S25 Ultra",
        category_id: 2,
        brand_id: 2,
        description: "Samsung Galaxy S25 Ultra - yuqori sifatli kamera va kuchli protsessor bilan.",
        summary: "Snapdragon 8 Gen 3 protsessor, 200 MP kamera va AMOLED 2X displey.",
        nasiya: "12 oy",
        price: 11999,
        rating: 5,
        is_aksiya: false,
        image: "/s25ultra.png",
    },
    ProductFixture {
        name: "MacBook Pro M2 14-inch",
        category_id: 3,
        brand_id: 5,
        description: "Apple MacBook Pro M2 kuchli ishlash va uzoq batareya quvvati bilan ajralib turadi.",
        summary: "Apple M2 chip, 14-inch Retina displey, 16GB RAM, 512GB SSD.",
        nasiya: "6 oy",
        price: 19999,
        rating: 5,
        is_aksiya: true,
        image: "/macbookprom2.png",
    },
    ProductFixture {
        name: "AirPods Pro 2",
        category_id: 4,
        brand_id: 5,
        description: "Apple AirPods Pro 2 - faollikni bostirish funksiyasi bilan mukammal eshitish tajribasi.",
        summary: "Active Noise Cancellation, Spatial Audio, va uzun batareya muddati.",
        nasiya: "6 oy",
        price: 2499,
        rating: 4,
        is_aksiya: false,
        image: "/airpodspro2.png",
    },
    ProductFixture {
        name: "Play Station 5",
        category_id: 4,
        brand_id: 5,
        description: "Sony Play Station 5 osez kayp qib o'ynesiz.",
        summary: "Siz uchun 2 ta pult bonus",
        nasiya: "12 oy",
        price: 599,
        rating: 4,
        is_aksiya: true,
        image: "/ps5.png",
    },
    ProductFixture {
        name: "Dell XPS 15 Laptop",
        category_id: 3,
        brand_id: 1,
        description: "Dell XPS 15 kuchli ishlash va mukammal ekran bilan eng yaxshi tanlov.",
        summary: "Intel Core i9, 32GB RAM, 1TB SSD, NVIDIA RTX 3050 Ti.",
        nasiya: "3 oy",
        price: 17999,
        rating: 5,
        is_aksiya: true,
        image: "/dellxps5.png",
    },
    ProductFixture {
        name: "iPad Pro 12.9-inch (2023)",
        category_id: 3,
        brand_id: 5,
        description: "iPad Pro 12.9-inch kuchli Apple M2 chip va Liquid Retina XDR displey bilan.",
        summary: "Apple Pencil qo‘llab-quvvatlashi, 5G va Face ID.",
        nasiya: "12 oy",
        price: 13999,
        rating: 5,
        is_aksiya: true,
        image: "/ipad12.png",
    },
    ProductFixture {
        name: "Bose QuietComfort 45",
        category_id: 4,
        brand_id: 6,
        description: "Bose QC 45 – aktiv shovqin kamaytirish bilan mukammal naushnik.",
        summary: "Bluetooth 5.1, 24 soat batareya muddati, USB-C zaryadlash.",
        nasiya: "6 oy",
        price: 29999,
        rating: 3,
        is_aksiya: false,
        image: "/boseque.png",
    },
    ProductFixture {
        name: "Logitech MX Master 3S",
        category_id: 7,
        brand_id: 7,
        description: "Logitech MX Master 3S - eng yaxshi ergonomik sichqoncha.",
        summary: "Uzoq batareya, ultra tez skroll, Bluetooth va USB-C zaryadlash.",
        nasiya: "3 oy",
        price: 999,
        rating: 5,
        is_aksiya: true,
        image: "/logitech.png",
    },
    ProductFixture {
        name: "Canon EOS R5 Camera",
        category_id: 6,
        brand_id: 6,
        description: "Canon EOS R5 - professional 8K video yozish imkoniyati bilan kamera.",
        summary: "45MP sensor, 8K video, Dual Pixel AF II.",
        nasiya: "6 oy",
        price: 2399,
        rating: 5,
        is_aksiya: false,
        image: "/canon.png",
    },
];

pub async fn seed_products<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if Products::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }
    if Categories::find().count(db).await? == 0 {
        return Ok(SeedOutcome::MissingParent("categories"));
    }
    if Brands::find().count(db).await? == 0 {
        return Ok(SeedOutcome::MissingParent("brands"));
    }

    let rows = PRODUCTS.iter().map(|p| products::ActiveModel {
        id: NotSet,
        name: Set(p.name.to_string()),
        description: Set(Some(p.description.to_string())),
        summary: Set(Some(p.summary.to_string())),
        nasiya: Set(Some(p.nasiya.to_string())),
        price: Set(p.price),
        rating: Set(p.rating),
        is_aksiya: Set(p.is_aksiya),
        image: Set(Some(p.image.to_string())),
        category_id: Set(p.category_id),
        brand_id: Set(p.brand_id),
        created_at: NotSet,
    });
    Products::insert_many(rows).exec(db).await?;
    Ok(SeedOutcome::Inserted(PRODUCTS.len() as u64))
}

const BANNERS: &[(i32, &str, &str, &str)] = &[
    (
        1,
        "Siz kutgan Xiaomi 12 Mi Lite",
        "Orginallik va qulay narxni o'zida jamlagan Xiaomi 12 Mi Lite siz uchun eng yaxshi takliflarimizdan biridir!",
        "banner_image1.png",
    ),
    (
        2,
        "Samsung Galaxy S25 Ultra yangiliklari",
        "Samsung Galaxy S25 Ultra – yuqori sifatli kamera va kuchli protsessor bilan sizga ajoyib tajriba taqdim etadi.",
        "s25ultra.png",
    ),
    (
        3,
        "MacBook Pro M2 – Kuchli va Ishonchli",
        "MacBook Pro M2 bilan samaradorlik va kreativlikni birlashtiring. 14-inch Retina displey va M2 chip.",
        "macbookprom2.png",
    ),
];

pub async fn seed_banners<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if Banners::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }
    if Products::find().count(db).await? == 0 {
        return Ok(SeedOutcome::MissingParent("products"));
    }

    let rows = BANNERS
        .iter()
        .map(|(product_id, name, description, image)| banners::ActiveModel {
            id: NotSet,
            product_id: Set(*product_id),
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            image: Set(Some(image.to_string())),
            created_at: NotSet,
        });
    Banners::insert_many(rows).exec(db).await?;
    Ok(SeedOutcome::Inserted(BANNERS.len() as u64))
}

/// `(product_id, color_id, price, image)`
const PRODUCT_ITEMS: &[(i32, i32, i64, &str)] = &[
    (1, 1, 2999999, "xiamo12lite.png"),
    (2, 2, 3499999, "s25ultra.png"),
    (3, 3, 3999999, "macbookprom2.png"),
    (4, 4, 4499999, "airpodspro2.png"),
    (5, 5, 4999999, "ps5.png"),
    (6, 1, 5499999, "dellxps5.png"),
    (7, 2, 5999999, "ipad12.png"),
    (8, 3, 6499999, "boseque.png"),
    (9, 4, 6999999, "logitech.png"),
    (10, 5, 7499999, "canon.png"),
];

pub async fn seed_product_items<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if ProductItems::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }
    if Products::find().count(db).await? == 0 {
        return Ok(SeedOutcome::MissingParent("products"));
    }
    if Colors::find().count(db).await? == 0 {
        return Ok(SeedOutcome::MissingParent("colors"));
    }

    let rows = PRODUCT_ITEMS
        .iter()
        .map(|(product_id, color_id, price, image)| product_items::ActiveModel {
            id: NotSet,
            product_id: Set(*product_id),
            color_id: Set(*color_id),
            price: Set(*price),
            image: Set(Some(image.to_string())),
            created_at: NotSet,
        });
    ProductItems::insert_many(rows).exec(db).await?;
    Ok(SeedOutcome::Inserted(PRODUCT_ITEMS.len() as u64))
}

/// `(category_id, name)`
const VARIATIONS: &[(i32, &str)] = &[
    (1, "Hajmi"),
    (2, "RAM"),
    (2, "Hotira"),
    (2, "Ekran hajmi"),
    (3, "Ekran hajmi"),
    (4, "Umumiy og'irlik"),
    (5, "BTU"),
    (6, "RAM"),
    (6, "Hotira"),
    (6, "Ekran hajmi"),
];

pub async fn seed_variations<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if Variations::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }
    if Categories::find().count(db).await? == 0 {
        return Ok(SeedOutcome::MissingParent("categories"));
    }

    let rows = VARIATIONS.iter().map(|(category_id, name)| variations::ActiveModel {
        id: NotSet,
        category_id: Set(*category_id),
        name: Set(name.to_string()),
        created_at: NotSet,
    });
    Variations::insert_many(rows).exec(db).await?;
    Ok(SeedOutcome::Inserted(VARIATIONS.len() as u64))
}

/// `(variation_id, value)`
const VARIATION_OPTIONS: &[(i32, &str)] = &[
    (1, "15 Kg"),
    (2, "8 GB"),
    (3, "1 TB"),
    (4, "13.3-inch"),
    (1, "42🏳‍🌈"),
    (7, "180000"),
    (6, "12"),
    (8, "16 GB"),
    (9, "256"),
    (10, "5.9-inch"),
];

pub async fn seed_variation_options<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if VariationOptions::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }
    if Variations::find().count(db).await? == 0 {
        return Ok(SeedOutcome::MissingParent("variations"));
    }

    let rows = VARIATION_OPTIONS
        .iter()
        .map(|(variation_id, value)| variation_options::ActiveModel {
            id: NotSet,
            variation_id: Set(*variation_id),
            value: Set(value.to_string()),
            created_at: NotSet,
        });
    VariationOptions::insert_many(rows).exec(db).await?;
    Ok(SeedOutcome::Inserted(VARIATION_OPTIONS.len() as u64))
}

/// `(product_item_id, variation_option_id)`
const PRODUCT_CONFIGURATIONS: &[(i32, i32)] = &[
    (3, 2),
    (3, 3),
    (3, 4),
    (1, 8),
    (1, 9),
    (1, 10),
    (2, 8),
    (2, 9),
    (2, 10),
];

pub async fn seed_product_configurations<C: ConnectionTrait>(db: &C) -> AppResult<SeedOutcome> {
    if ProductConfigurations::find().count(db).await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }
    if ProductItems::find().count(db).await? == 0 {
        return Ok(SeedOutcome::MissingParent("product_items"));
    }
    if VariationOptions::find().count(db).await? == 0 {
        return Ok(SeedOutcome::MissingParent("variation_options"));
    }

    let rows = PRODUCT_CONFIGURATIONS
        .iter()
        .map(|(item_id, option_id)| product_configurations::ActiveModel {
            id: NotSet,
            product_item_id: Set(*item_id),
            variation_option_id: Set(*option_id),
            created_at: NotSet,
        });
    ProductConfigurations::insert_many(rows).exec(db).await?;
    Ok(SeedOutcome::Inserted(PRODUCT_CONFIGURATIONS.len() as u64))
}

/// Fixture sizes, in seeding order.
pub fn fixture_sizes() -> [(&'static str, usize); 10] {
    [
        ("users", 1),
        ("categories", CATEGORIES.len()),
        ("brands", BRANDS.len()),
        ("colors", COLORS.len()),
        ("products", PRODUCTS.len()),
        ("banners", BANNERS.len()),
        ("product_items", PRODUCT_ITEMS.len()),
        ("variations", VARIATIONS.len()),
        ("variation_options", VARIATION_OPTIONS.len()),
        ("product_configurations", PRODUCT_CONFIGURATIONS.len()),
    ]
}
