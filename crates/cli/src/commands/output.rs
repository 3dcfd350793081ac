//! Plain-text rendering of storefront state.

use chapter_two_storefront::Catalog;
use chapter_two_storefront::models::{Look, Product, User, UserPreferences};
use chapter_two_storefront::notify::Notice;
use chapter_two_storefront::services::{Cart, Wishlist};

fn option_label(value: Option<&str>) -> &str {
    value.unwrap_or("Default")
}

#[allow(clippy::print_stdout)]
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match &notice.description {
            Some(description) => {
                println!("[{}] {} ({description})", notice.level, notice.message);
            }
            None => println!("[{}] {}", notice.level, notice.message),
        }
    }
}

#[allow(clippy::print_stdout)]
pub fn print_products(products: &[&Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }
    for product in products {
        let badge = if product.is_new { " [new]" } else { "" };
        println!(
            "{:>3}  {:<28} {:<12} {:>9}  ★ {}{badge}",
            product.id, product.name, product.category, product.price, product.average_rating
        );
    }
}

#[allow(clippy::print_stdout)]
pub fn print_product(product: &Product) {
    println!("{} (#{})", product.name, product.id);
    match &product.original_price {
        Some(original) => println!("  {} (was {original})", product.price),
        None => println!("  {}", product.price),
    }
    println!("  Category: {}", product.category);
    println!("  Colors:   {}", product.colors.join(", "));
    println!("  Sizes:    {}", product.sizes.join(", "));
    if !product.description.is_empty() {
        println!("  {}", product.description);
    }
    println!(
        "  Rating:   {} from {} review(s)",
        product.average_rating,
        product.reviews.len()
    );
    for review in &product.reviews {
        println!(
            "    {} {} on {}: {}",
            review.rating,
            review.user_name,
            review.date.format("%Y-%m-%d"),
            review.comment
        );
    }
}

#[allow(clippy::print_stdout)]
pub fn print_categories(categories: &[String]) {
    for category in categories {
        println!("{category}");
    }
}

#[allow(clippy::print_stdout)]
pub fn print_looks(looks: &[Look]) {
    for look in looks {
        println!(
            "{:>3}  {:<24} {} product(s)",
            look.id,
            look.name,
            look.product_ids.len()
        );
    }
}

#[allow(clippy::print_stdout)]
pub fn print_look(catalog: &Catalog, look: &Look) {
    println!("{} (#{})", look.name, look.id);
    println!("  {}", look.description);

    let products = catalog.look_products(look);
    if products.is_empty() {
        println!("  No products in this look.");
    } else {
        print_products(&products);
        println!("  Sizes: {}", catalog.look_sizes(look).join(", "));
    }

    let others = catalog.other_looks(look.id, 3);
    if !others.is_empty() {
        let names: Vec<&str> = others.iter().map(|l| l.name.as_str()).collect();
        println!("  More looks: {}", names.join(", "));
    }
}

#[allow(clippy::print_stdout)]
pub fn print_cart(cart: &Cart) {
    let visibility = if cart.is_open() { "open" } else { "closed" };
    println!("Cart ({} item(s), {visibility})", cart.item_count());
    for item in cart.items() {
        println!(
            "  {:>3}  {:<28} {:>9} x {:<3} Color: {}, Size: {}",
            item.id,
            item.name,
            item.price,
            item.quantity,
            option_label(item.selected_color.as_deref()),
            option_label(item.selected_size.as_deref()),
        );
    }
    println!("Total: {}", cart.total_price());
}

#[allow(clippy::print_stdout)]
pub fn print_wishlist(wishlist: &Wishlist) {
    let visibility = if wishlist.is_open() { "open" } else { "closed" };
    println!("Wishlist ({} item(s), {visibility})", wishlist.item_count());
    for item in wishlist.items() {
        println!("  {:>3}  {:<28} {:>9}", item.id, item.name, item.price);
    }
}

#[allow(clippy::print_stdout)]
pub fn print_user(user: Option<&User>) {
    match user {
        Some(user) => println!("Signed in as {} <{}> ({})", user.name, user.email, user.id),
        None => println!("Not signed in."),
    }
}

#[allow(clippy::print_stdout)]
pub fn print_preferences(preferences: &UserPreferences) {
    println!(
        "Preferred category: {}",
        preferences.effective_category().unwrap_or("none")
    );
}
