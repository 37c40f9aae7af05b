//! Shared constants used across the application

/// Literal marker replaced by the meeting link during derivation.
pub const PLACEHOLDER_TOKEN: &str = "{{ZOOM_LINK}}";

/// Announcement skeleton the composer starts with when no template file is
/// configured.
pub const DEFAULT_TEMPLATE: &str = "🧑‍🏫 ගුරුතුමිය: නිලක්ෂි හෙට්ටිආරච්චි
🎨 Colour Zone Online Art Class 
📍 ස්ථානය: සූරියවැව
💻 මාධ්‍යය: Zoom

🔗 Zoom ලින්ක්: {{ZOOM_LINK}}

කරුණාකර නියමිත වේලාවට Zoom ලින්ක් එක භාවිතා කර පන්තියට සම්බන්ධ වන්න. පන්තිය ආරම්භයට පෙර ඔබගේ අන්තර්ජාල සම්බන්ධතාවය, ශබ්දය සහ කැමරාව පරීක්ෂා කර ගන්න.";
