use crate::terms::TermSpec;

/// Dietary preferences and their conflict sets.
///
/// Unlike allergens, the patterns here are what *violates* the preference;
/// the preference name itself is never matched.
pub(crate) static PREFERENCES: &[TermSpec] = &[
    term! {
        name: "Vegan",
        aliases: ["plant based", "plant-based"],
        patterns: [
            "meat", "beef", "pork", "chicken", "turkey", "lamb", "mutton", "veal", "duck", "bacon", "ham",
            "gelatin", "gelatine", "lard", "tallow", "fish", "anchovy", "anchovies", "shrimp", "prawn", "prawns",
            "crab", "lobster", "oyster", "oysters", "milk", "dairy", "cream", "butter", "cheese", "whey",
            "casein", "lactose", "yogurt", "yoghurt", "ghee", "egg", "eggs", "honey", "beeswax", "carmine",
            "cochineal", "shellac", "isinglass", "collagen", "bone broth", "bone char",
        ],
        excludes: [
            "cocoa butter", "shea butter", "peanut butter", "nut butter", "almond butter", "cashew butter",
            "apple butter", "coconut cream", "cream of tartar", "coconut milk", "almond milk", "oat milk",
            "soy milk", "rice milk",
        ],
    },
    term! {
        name: "Vegetarian",
        patterns: [
            "meat", "beef", "pork", "chicken", "turkey", "lamb", "mutton", "veal", "duck", "bacon", "ham",
            "gelatin", "gelatine", "lard", "tallow", "fish", "anchovy", "anchovies", "shrimp", "prawn", "prawns",
            "crab", "lobster", "oyster", "oysters", "rennet", "carmine", "cochineal", "isinglass", "bone broth",
        ],
    },
    term! {
        name: "Pescatarian",
        aliases: ["pescetarian"],
        patterns: [
            "meat", "beef", "pork", "chicken", "turkey", "lamb", "mutton", "veal", "duck", "bacon", "ham",
            "gelatin", "gelatine", "lard", "tallow", "bone broth",
        ],
    },
    term! {
        name: "Halal",
        patterns: [
            "pork", "bacon", "ham", "lard", "gelatin", "gelatine", "alcohol", "wine", "beer", "rum", "brandy",
            "liqueur", "carmine", "cochineal",
        ],
    },
    term! {
        name: "Kosher",
        patterns: [
            "pork", "bacon", "ham", "lard", "gelatin", "gelatine", "shrimp", "prawn", "prawns", "crab", "lobster",
            "clam", "clams", "oyster", "oysters", "mussel", "mussels", "squid", "octopus", "carmine",
        ],
    },
    term! {
        name: "Dairy-Free",
        aliases: ["dairy free", "lactose free", "lactose-free"],
        patterns: [
            "milk", "dairy", "cream", "butter", "cheese", "whey", "casein", "caseinate", "lactose", "yogurt",
            "yoghurt", "ghee", "curd", "kefir",
        ],
        excludes: [
            "cocoa butter", "shea butter", "peanut butter", "nut butter", "almond butter", "cashew butter",
            "apple butter", "coconut cream", "cream of tartar", "coconut milk", "almond milk", "oat milk",
            "soy milk", "rice milk",
        ],
    },
    term! {
        name: "Gluten-Free",
        aliases: ["gluten free"],
        patterns: ["gluten", "wheat", "barley", "rye", "malt", "spelt", "semolina", "durum", "triticale", "seitan"],
    },
    term! {
        name: "Keto",
        aliases: ["ketogenic", "low carb", "low-carb"],
        patterns: [
            "sugar", "cane sugar", "glucose", "fructose", "sucrose", "dextrose", "maltodextrin", "corn syrup",
            "syrup", "honey", "flour", "rice", "potato", "potatoes", "pasta", "bread", "starch",
        ],
    },
];
