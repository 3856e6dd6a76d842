// Synthetic demo reviews.
//
// Used when no real review data is available (and by `reviewlens demo`).
// The set mixes specific, balanced reviews with ones that carry the usual
// fabrication markers so every stage of the pipeline has something to do.
// Reports built from it are tagged `is_demo_data`.

use super::models::RawReview;

pub const SAMPLE_PRODUCT_TITLE: &str = "Sample Product - Wireless Bluetooth Headphones";
pub const SAMPLE_PRODUCT_IMAGE: &str = "https://via.placeholder.com/300x300?text=Product+Image";

struct SampleReview {
    id: &'static str,
    reviewer: &'static str,
    rating: f64,
    title: &'static str,
    text: &'static str,
    date: &'static str,
    verified: bool,
    helpful: u32,
}

const SAMPLES: &[SampleReview] = &[
    SampleReview {
        id: "R1GENUINE001",
        reviewer: "Priya S.",
        rating: 4.0,
        title: "Good product but some minor issues",
        text: "I've been using this for about 3 weeks now. The build quality is decent and it works as advertised. However, I noticed the battery life is slightly less than claimed - getting about 6 hours instead of 8. The sound quality is good for the price point. Delivery was on time. Would recommend for casual use but maybe look elsewhere for professional use.",
        date: "2025-01-15",
        verified: true,
        helpful: 12,
    },
    SampleReview {
        id: "R1GENUINE002",
        reviewer: "Rajesh K.",
        rating: 3.0,
        title: "Average performance, not worth the hype",
        text: "After reading all the positive reviews, I had high expectations. Reality is it's just an average product. Does the job but nothing special. The packaging was nice but the product itself feels a bit cheap. I've used similar products from other brands that were better. Not bad, but not great either. Return process was hassle-free though.",
        date: "2025-01-10",
        verified: true,
        helpful: 8,
    },
    SampleReview {
        id: "R1GENUINE003",
        reviewer: "Anita D.",
        rating: 5.0,
        title: "Exceeded expectations!",
        text: "Bought this after comparing with 3 other similar products. This one stood out for the features vs price ratio. Setup took about 30 minutes following the manual. Been using for 2 months and no issues. The customer support was helpful when I had questions about settings. Only minor complaint is the cable could be longer. Overall very satisfied with my purchase.",
        date: "2025-01-08",
        verified: true,
        helpful: 25,
    },
    SampleReview {
        id: "R1GENUINE004",
        reviewer: "Vikram S.",
        rating: 2.0,
        title: "Disappointed with quality",
        text: "Received the product and was immediately disappointed. The photos online looked much better. Material feels flimsy and I doubt it will last long. Tried contacting seller but no response yet. Will update if things improve but as of now would not recommend. Expected much better for this price range.",
        date: "2025-01-05",
        verified: true,
        helpful: 15,
    },
    SampleReview {
        id: "R1FAKE001",
        reviewer: "Happy Customer123",
        rating: 5.0,
        title: "BEST PRODUCT EVER!!!",
        text: "Amazing product! Best quality! Must buy! Everyone should buy this! 5 stars! Perfect in every way! No complaints at all! Buy it now! You won't regret it! Best purchase ever! Highly recommended! A+++! Super happy!",
        date: "2025-01-20",
        verified: false,
        helpful: 0,
    },
    SampleReview {
        id: "R1FAKE002",
        reviewer: "Review Verified User",
        rating: 5.0,
        title: "Perfect product must buy immediately",
        text: "This product is perfect. I am very satisfied customer. The quality is best. Everyone in my family loves it. We bought 10 more for gifts. Best value for money. No other product compares. Buy without thinking!",
        date: "2025-01-19",
        verified: false,
        helpful: 1,
    },
    SampleReview {
        id: "R1FAKE003",
        reviewer: "John D.",
        rating: 5.0,
        title: "Excellent",
        text: "Good product. Nice quality. Fast delivery. Recommended.",
        date: "2025-01-18",
        verified: false,
        helpful: 0,
    },
    SampleReview {
        id: "R1FAKE004",
        reviewer: "Satisfied Buyer",
        rating: 5.0,
        title: "Worth every penny",
        text: "Best product in market. Superior quality than competitors. My life changed after using this. Cannot imagine living without it now. Every home needs one. Revolutionary product. Game changer. Innovation at its best!",
        date: "2025-01-17",
        verified: false,
        helpful: 2,
    },
    SampleReview {
        id: "R1FAKE005",
        reviewer: "TestReviewer",
        rating: 5.0,
        title: "Amazing Amazing Amazing",
        text: "Amazing product amazing quality amazing price amazing delivery amazing packaging amazing everything. What more can I say? Just amazing!",
        date: "2025-01-16",
        verified: false,
        helpful: 0,
    },
    SampleReview {
        id: "R1GENUINE005",
        reviewer: "Meera P.",
        rating: 4.0,
        title: "Solid purchase with minor quirks",
        text: "Used this for a month before reviewing. Overall satisfied. The product does what it claims. Setup was straightforward. A few things could be better - the instructions were confusing in parts and the app could use improvement. But for the price, it's a fair deal. Would buy again.",
        date: "2025-01-12",
        verified: true,
        helpful: 18,
    },
    SampleReview {
        id: "R1GENUINE006",
        reviewer: "Arjun N.",
        rating: 4.0,
        title: "Good for beginners",
        text: "As someone new to this category, I found this product easy to use. It's not the most advanced option but perfect for starting out. The learning curve is gentle and the results are satisfactory. Might upgrade to a better model later but for now this serves my needs well.",
        date: "2025-01-11",
        verified: true,
        helpful: 10,
    },
    SampleReview {
        id: "R1GENUINE007",
        reviewer: "Deepak R.",
        rating: 3.0,
        title: "Mixed feelings",
        text: "There are things I like and dislike about this product. The design is sleek and modern. Performance is adequate. But it heats up quickly during extended use which is concerning. Also the warranty process seems complicated. It's okay for the price but don't expect miracles.",
        date: "2025-01-09",
        verified: true,
        helpful: 22,
    },
];

/// The synthetic review set, tagged with the sample product title and image.
pub fn sample_reviews() -> Vec<RawReview> {
    SAMPLES
        .iter()
        .map(|s| RawReview {
            review_id: s.id.to_string(),
            reviewer_name: s.reviewer.to_string(),
            rating: s.rating,
            title: s.title.to_string(),
            text: s.text.to_string(),
            date: s.date.to_string(),
            verified_purchase: s.verified,
            helpful_votes: s.helpful,
            images: Vec::new(),
            product_title: Some(SAMPLE_PRODUCT_TITLE.to_string()),
            product_image: Some(SAMPLE_PRODUCT_IMAGE.to_string()),
        })
        .collect()
}

/// The synthetic review set relabelled for a specific product, so a demo
/// report still shows the identifier the user asked about.
pub fn sample_reviews_for_product(product_id: &str) -> Vec<RawReview> {
    let title = format!("Catalog Product ({product_id})");
    sample_reviews()
        .into_iter()
        .map(|mut r| {
            r.product_title = Some(title.clone());
            r
        })
        .collect()
}
