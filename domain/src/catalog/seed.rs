//! Disease categories the bundled classifier was trained on.

/// Seed entries loaded into every fresh [`DiseaseCatalog`](super::entities::DiseaseCatalog).
pub const SEEDED_DISEASES: &[(i64, &str)] = &[
    (0, "Acne and Rosacea"),
    (1, "Actinic Keratosis Basal Cell Carcinoma and other Malignant Lesions"),
    (2, "Atopic Dermatitis"),
    (3, "Bullous Disease"),
    (4, "Cellulitis Impetigo and other Bacterial Infections"),
    (5, "Eczema"),
    (6, "Exanthems and Drug Eruptions"),
    (7, "Hair Loss Photos Alopecia and other Hair Diseases"),
    (8, "Herpes HPV and other STDs"),
    (9, "Light Diseases and Disorders of Pigmentation"),
    (10, "Lupus and other Connective Tissue diseases"),
    (11, "Melanoma Skin Cancer Nevi and Moles"),
    (12, "Nail Fungus and other Nail Disease"),
    (13, "Poison Ivy Photos and other Contact Dermatitis"),
    (14, "Psoriasis pictures Lichen Planus and related diseases"),
    (15, "Scabies Lyme Disease and other Infestations and Bites"),
    (16, "Seborrheic Keratoses and other Benign Tumors"),
    (17, "Systemic Disease"),
    (18, "Tinea Ringworm Candidiasis and other Fungal Infections"),
    (19, "Urticaria Hives"),
    (20, "Vascular Tumors"),
    (21, "Vasculitis"),
    (22, "Warts Molluscum and other Viral Infections"),
];
