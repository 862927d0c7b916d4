//! Built-in registry data
//!
//! Order matters: the first family with any matching variation wins, and a
//! variation matches both when the text contains it and when it contains the
//! text. A family declared early therefore claims every bare word found
//! inside its variations ("eggplant" claims the text "egg"), while a family
//! declared late never sees text containing an earlier variation. Bare
//! words that appear on their own in lists ("garlic", "onion", "butter",
//! "salt") come before any family whose variations contain them, and no
//! other family's variation contains "salt" or "butter". Compound products that would
//! only shadow a common bare word are left out and fold into the general
//! family ("peanut butter" lands in "butter").
//!
//! Unit words ("cloves", "head", "stick") must never appear as a variation
//! or they would be demoted to counts when parsing quantities.

use crate::models::Section;

/// (family, section, variations)
pub(super) type FamilyRow = (&'static str, Section, &'static [&'static str]);

/// (unit, factor into base unit, preferred display unit)
pub(super) type FactorRow = (&'static str, f64, bool);

/// (family, base unit, multipliers)
pub(super) type ConversionRow = (&'static str, &'static str, &'static [FactorRow]);

pub(super) const BUILTIN_FAMILIES: &[FamilyRow] = &[
    // ========================================================================
    // Produce
    // ========================================================================
    ("garlic", Section::Produce, &["garlic", "garlic clove", "garlic cloves", "cloves of garlic"]),
    (
        "onion",
        Section::Produce,
        &["onion", "onions", "yellow onion", "red onion", "white onion", "sweet onion"],
    ),
    ("green onion", Section::Produce, &["scallion", "scallions"]),
    (
        "tomato",
        Section::Produce,
        &["tomato", "tomatoes", "roma tomato", "roma tomatoes", "cherry tomatoes"],
    ),
    ("tomato sauce", Section::Pantry, &["passata"]),
    ("sweet potato", Section::Produce, &["sweet potato", "yam", "yams"]),
    ("potato", Section::Produce, &["potato", "potatoes", "russet potatoes", "yukon gold"]),
    ("black pepper", Section::Pantry, &["black pepper", "ground pepper", "peppercorns"]),
    (
        "red pepper flakes",
        Section::Pantry,
        &["red pepper flakes", "crushed red pepper", "chili flakes"],
    ),
    (
        "bell pepper",
        Section::Produce,
        &["bell pepper", "bell peppers", "red peppers", "green pepper", "green peppers", "capsicum"],
    ),
    ("carrot", Section::Produce, &["carrot", "carrots"]),
    ("celery", Section::Produce, &["celery", "celery stalks"]),
    ("lettuce", Section::Produce, &["lettuce", "romaine", "iceberg"]),
    ("spinach", Section::Produce, &["spinach", "baby spinach"]),
    ("mushroom", Section::Produce, &["mushroom", "mushrooms", "cremini", "shiitake"]),
    ("lemon", Section::Produce, &["lemon", "lemons", "lemon juice"]),
    ("lime", Section::Produce, &["lime", "limes", "lime juice"]),
    ("ginger", Section::Produce, &["ginger", "ginger root"]),
    ("cilantro", Section::Produce, &["cilantro", "coriander leaves"]),
    ("parsley", Section::Produce, &["parsley", "flat-leaf parsley"]),
    ("basil", Section::Produce, &["basil", "basil leaves"]),
    ("avocado", Section::Produce, &["avocado", "avocados"]),
    ("eggplant", Section::Produce, &["eggplant", "aubergine"]),
    ("pineapple", Section::Produce, &["pineapple"]),
    ("apple", Section::Produce, &["apple", "apples"]),
    ("banana", Section::Produce, &["banana", "bananas"]),
    // ========================================================================
    // Meat & seafood
    // ========================================================================
    ("chicken broth", Section::Pantry, &["chicken broth", "chicken stock"]),
    ("vegetable broth", Section::Pantry, &["vegetable broth", "vegetable stock", "veggie broth"]),
    (
        "chicken",
        Section::MeatSeafood,
        &["chicken", "chicken breast", "chicken breasts", "chicken thighs"],
    ),
    ("beef", Section::MeatSeafood, &["beef", "ground beef", "steak", "chuck roast"]),
    ("bacon", Section::MeatSeafood, &["bacon", "bacon strips"]),
    ("pork", Section::MeatSeafood, &["pork", "pork chops", "pork shoulder", "ground pork"]),
    ("salmon", Section::MeatSeafood, &["salmon", "salmon fillets"]),
    ("shrimp", Section::MeatSeafood, &["shrimp", "prawns"]),
    // ========================================================================
    // Dairy
    // ========================================================================
    ("butter", Section::Dairy, &["butter"]),
    ("heavy cream", Section::Dairy, &["heavy cream", "whipping cream", "double cream"]),
    ("sour cream", Section::Dairy, &["sour cream"]),
    ("ice cream", Section::Frozen, &["ice cream"]),
    ("cheese", Section::Dairy, &["cheese", "cheddar", "parmesan", "mozzarella", "monterey jack"]),
    ("milk", Section::Dairy, &["milk", "whole milk", "skim milk", "2% milk"]),
    ("yogurt", Section::Dairy, &["yogurt", "greek yogurt", "yoghurt"]),
    ("egg", Section::Dairy, &["egg", "eggs", "egg yolks", "egg whites"]),
    // ========================================================================
    // Pantry
    // ========================================================================
    ("flour", Section::Pantry, &["flour", "all-purpose flour", "all purpose flour", "plain flour"]),
    ("sugar", Section::Pantry, &["sugar", "granulated sugar", "white sugar", "caster sugar"]),
    ("salt", Section::Pantry, &["salt", "kosher salt", "sea salt", "table salt"]),
    ("olive oil", Section::Pantry, &["olive oil", "extra virgin olive oil", "evoo"]),
    ("vegetable oil", Section::Pantry, &["vegetable oil", "canola oil", "sunflower oil"]),
    ("rice", Section::Pantry, &["rice", "white rice", "brown rice", "basmati", "jasmine rice"]),
    ("pasta", Section::Pantry, &["pasta", "spaghetti", "penne", "linguine", "macaroni"]),
    ("baking soda", Section::Pantry, &["baking soda", "bicarbonate of soda"]),
    ("baking powder", Section::Pantry, &["baking powder"]),
    ("vanilla", Section::Pantry, &["vanilla extract", "vanilla"]),
    ("honey", Section::Pantry, &["honey"]),
    ("soy sauce", Section::Pantry, &["soy sauce", "tamari"]),
    // ========================================================================
    // Bakery
    // ========================================================================
    ("bread", Section::Bakery, &["bread", "baguette", "sourdough"]),
    ("breadcrumbs", Section::Pantry, &["panko"]),
    ("tortilla", Section::Bakery, &["tortilla", "tortillas"]),
];

pub(super) const BUILTIN_CONVERSIONS: &[ConversionRow] = &[
    (
        "garlic",
        "cloves",
        &[
            ("clove", 1.0, false),
            ("cloves", 1.0, false),
            ("head", 10.0, false),
            ("heads", 10.0, false),
            ("bulb", 10.0, false),
            ("tablespoon", 3.0, false),
            ("tablespoons", 3.0, false),
            ("tbsp", 3.0, false),
            ("teaspoon", 1.0, false),
            ("teaspoons", 1.0, false),
            ("tsp", 1.0, false),
        ],
    ),
    (
        "butter",
        "tablespoon",
        &[
            ("tablespoon", 1.0, false),
            ("tablespoons", 1.0, false),
            ("tbsp", 1.0, false),
            ("teaspoon", 1.0 / 3.0, false),
            ("teaspoons", 1.0 / 3.0, false),
            ("tsp", 1.0 / 3.0, false),
            ("stick", 8.0, false),
            ("sticks", 8.0, false),
            ("cup", 16.0, false),
            ("cups", 16.0, false),
            ("pound", 32.0, false),
            ("pounds", 32.0, false),
            ("lb", 32.0, false),
            ("g", 1.0 / 14.2, false),
            ("grams", 1.0 / 14.2, false),
        ],
    ),
    (
        "onion",
        "",
        &[("cup", 1.0, false), ("cups", 1.0, false)],
    ),
    (
        "flour",
        "cup",
        &[
            ("cup", 1.0, false),
            ("cups", 1.0, false),
            ("tablespoon", 1.0 / 16.0, false),
            ("tablespoons", 1.0 / 16.0, false),
            ("tbsp", 1.0 / 16.0, false),
            ("teaspoon", 1.0 / 48.0, false),
            ("teaspoons", 1.0 / 48.0, false),
            ("tsp", 1.0 / 48.0, false),
            ("pound", 3.6, false),
            ("pounds", 3.6, false),
            ("lb", 3.6, false),
            ("g", 1.0 / 125.0, false),
            ("grams", 1.0 / 125.0, false),
        ],
    ),
    (
        "sugar",
        "cup",
        &[
            ("cup", 1.0, false),
            ("cups", 1.0, false),
            ("tablespoon", 1.0 / 16.0, false),
            ("tablespoons", 1.0 / 16.0, false),
            ("tbsp", 1.0 / 16.0, false),
            ("teaspoon", 1.0 / 48.0, false),
            ("teaspoons", 1.0 / 48.0, false),
            ("tsp", 1.0 / 48.0, false),
            ("pound", 2.25, false),
            ("pounds", 2.25, false),
            ("lb", 2.25, false),
            ("g", 1.0 / 200.0, false),
            ("grams", 1.0 / 200.0, false),
        ],
    ),
    (
        "milk",
        "cup",
        &[
            ("gallon", 16.0, true),
            ("quart", 4.0, true),
            ("cup", 1.0, false),
            ("cups", 1.0, false),
            ("tablespoon", 1.0 / 16.0, false),
            ("tablespoons", 1.0 / 16.0, false),
            ("tbsp", 1.0 / 16.0, false),
            ("pint", 2.0, false),
            ("pints", 2.0, false),
            ("quarts", 4.0, false),
            ("gallons", 16.0, false),
            ("ml", 1.0 / 236.588, false),
            ("liter", 1000.0 / 236.588, false),
            ("liters", 1000.0 / 236.588, false),
        ],
    ),
    (
        "heavy cream",
        "cup",
        &[
            ("pint", 2.0, true),
            ("cup", 1.0, false),
            ("cups", 1.0, false),
            ("tablespoon", 1.0 / 16.0, false),
            ("tablespoons", 1.0 / 16.0, false),
            ("tbsp", 1.0 / 16.0, false),
            ("pints", 2.0, false),
            ("ml", 1.0 / 236.588, false),
        ],
    ),
    (
        "olive oil",
        "tablespoon",
        &[
            ("cup", 16.0, true),
            ("tablespoon", 1.0, false),
            ("tablespoons", 1.0, false),
            ("tbsp", 1.0, false),
            ("teaspoon", 1.0 / 3.0, false),
            ("teaspoons", 1.0 / 3.0, false),
            ("tsp", 1.0 / 3.0, false),
            ("cups", 16.0, false),
            ("ml", 1.0 / 14.7868, false),
        ],
    ),
    (
        "chicken",
        "pound",
        &[
            ("pound", 1.0, false),
            ("pounds", 1.0, false),
            ("lb", 1.0, false),
            ("lbs", 1.0, false),
            ("ounce", 1.0 / 16.0, false),
            ("ounces", 1.0 / 16.0, false),
            ("oz", 1.0 / 16.0, false),
            ("kg", 2.20462, false),
            ("g", 1.0 / 453.592, false),
            ("grams", 1.0 / 453.592, false),
        ],
    ),
    (
        "beef",
        "pound",
        &[
            ("pound", 1.0, false),
            ("pounds", 1.0, false),
            ("lb", 1.0, false),
            ("lbs", 1.0, false),
            ("ounce", 1.0 / 16.0, false),
            ("ounces", 1.0 / 16.0, false),
            ("oz", 1.0 / 16.0, false),
            ("kg", 2.20462, false),
            ("g", 1.0 / 453.592, false),
            ("grams", 1.0 / 453.592, false),
        ],
    ),
    (
        "cheese",
        "cup",
        &[
            ("pound", 4.0, true),
            ("cup", 1.0, false),
            ("cups", 1.0, false),
            ("ounce", 0.25, false),
            ("ounces", 0.25, false),
            ("oz", 0.25, false),
            ("pounds", 4.0, false),
            ("lb", 4.0, false),
        ],
    ),
    (
        "rice",
        "cup",
        &[
            ("cup", 1.0, false),
            ("cups", 1.0, false),
            ("pound", 2.25, false),
            ("pounds", 2.25, false),
            ("lb", 2.25, false),
            ("g", 1.0 / 185.0, false),
            ("grams", 1.0 / 185.0, false),
        ],
    ),
];
