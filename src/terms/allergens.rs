use crate::terms::TermSpec;

/// Allergen terms: a pattern hit means the allergen is present.
pub(crate) static ALLERGENS: &[TermSpec] = &[
    term! {
        name: "Milk",
        aliases: ["dairy", "milk allergy", "lactose"],
        patterns: [
            "milk", "milks", "dairy", "casein", "caseinate", "caseinates", "whey", "lactose", "lactalbumin",
            "lactoglobulin", "butter", "buttermilk", "ghee", "cream", "cheese", "cheeses", "yogurt", "yoghurt",
            "curd", "curds", "kefir", "paneer", "custard", "milk solids", "milk powder", "skimmed milk",
        ],
        excludes: [
            "cocoa butter", "shea butter", "peanut butter", "nut butter", "almond butter", "cashew butter",
            "apple butter", "coconut cream", "cream of tartar", "coconut milk", "almond milk", "oat milk",
            "soy milk", "rice milk",
        ],
    },
    term! {
        name: "Eggs",
        aliases: ["egg"],
        patterns: [
            "egg", "eggs", "egg white", "egg yolk", "albumin", "albumen", "ovalbumin", "lysozyme", "mayonnaise",
            "meringue", "ovomucoid",
        ],
    },
    term! {
        name: "Peanuts",
        aliases: ["peanut", "groundnut"],
        patterns: ["peanut", "peanuts", "groundnut", "groundnuts", "arachis", "monkey nuts"],
    },
    term! {
        name: "Tree Nuts",
        aliases: ["tree nut", "nuts", "treenuts"],
        patterns: [
            "tree nut", "tree nuts", "almond", "almonds", "cashew", "cashews", "walnut", "walnuts", "pecan",
            "pecans", "hazelnut", "hazelnuts", "pistachio", "pistachios", "macadamia", "brazil nut",
            "brazil nuts", "pine nut", "pine nuts", "praline", "marzipan", "nougat", "filbert", "filberts",
        ],
    },
    term! {
        name: "Soy",
        aliases: ["soya", "soybean", "soybeans"],
        patterns: [
            "soy", "soya", "soybean", "soybeans", "soy lecithin", "edamame", "tofu", "tempeh", "miso", "natto",
            "shoyu", "tamari",
        ],
    },
    term! {
        name: "Wheat",
        patterns: [
            "wheat", "flour", "semolina", "durum", "spelt", "farro", "kamut", "bulgur", "couscous", "seitan",
            "einkorn", "emmer",
        ],
        excludes: [
            "rice flour", "coconut flour", "almond flour", "corn flour", "potato flour", "tapioca flour",
            "chickpea flour", "oat flour", "soy flour", "rye flour", "lupin flour", "mustard flour",
            "cassava flour", "sorghum flour", "millet flour", "quinoa flour", "teff flour", "banana flour",
            "hemp flour", "buckwheat flour",
        ],
    },
    term! {
        name: "Gluten",
        aliases: ["celiac", "coeliac"],
        patterns: [
            "gluten", "wheat", "barley", "rye", "malt", "spelt", "semolina", "durum", "triticale", "bulgur",
            "couscous", "seitan", "farro", "kamut", "brewer's yeast",
        ],
    },
    term! {
        name: "Fish",
        patterns: [
            "fish", "anchovy", "anchovies", "cod", "salmon", "tuna", "trout", "haddock", "sardine", "sardines",
            "mackerel", "tilapia", "pollock", "bass", "halibut", "fish sauce", "fish oil",
        ],
    },
    term! {
        name: "Shellfish",
        aliases: ["crustaceans", "crustacean"],
        patterns: [
            "shellfish", "shrimp", "shrimps", "prawn", "prawns", "crab", "crabs", "lobster", "lobsters",
            "crayfish", "krill", "langoustine", "langoustines", "crustacean", "crustaceans",
        ],
    },
    term! {
        name: "Molluscs",
        aliases: ["mollusks", "mollusc", "mollusk"],
        patterns: [
            "mollusc", "molluscs", "mollusk", "mollusks", "clam", "clams", "mussel", "mussels", "oyster",
            "oysters", "scallop", "scallops", "squid", "octopus", "snail", "snails", "calamari", "abalone",
        ],
    },
    term! {
        name: "Sesame",
        patterns: ["sesame", "sesame seed", "sesame seeds", "tahini", "tahina", "gomasio", "benne"],
    },
    term! {
        name: "Mustard",
        patterns: ["mustard", "mustard seed", "mustard seeds", "mustard flour"],
    },
    term! {
        name: "Celery",
        patterns: ["celery", "celeriac", "celery salt", "celery seed"],
    },
    term! {
        name: "Lupin",
        aliases: ["lupine"],
        patterns: ["lupin", "lupine", "lupins", "lupines", "lupin flour"],
    },
    term! {
        name: "Sulfites",
        aliases: ["sulphites", "sulfite", "sulphite"],
        patterns: [
            "sulfite", "sulfites", "sulphite", "sulphites", "sulfur dioxide", "sulphur dioxide", "metabisulfite",
            "metabisulphite", "bisulfite", "bisulphite", "e220", "e221", "e222", "e223", "e224", "e228",
        ],
    },
    term! {
        name: "Corn",
        aliases: ["maize"],
        patterns: ["corn", "maize", "cornstarch", "corn starch", "corn syrup", "cornmeal", "polenta", "hominy"],
    },
];
