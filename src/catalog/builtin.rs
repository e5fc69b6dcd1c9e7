// Reference ingredient table shipped with the app. Every name here is assumed
// available until the user classifies it otherwise.
#[rustfmt::skip]
pub(super) const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Meats",
        &[
            "Ground Beef", "Beef Ribeye", "Beef Brisket", "Chuck Roast", "Beef Stew Meat",
            "Flank Steak", "Pork Shoulder", "Pork Chop", "Pork Belly", "Bacon", "Pancetta",
            "Prosciutto", "Ham", "Sausage", "Bratwurst", "Frankfurter", "Chorizo",
            "Italian Sausage", "Pepperoni", "Ground Pork", "Chicken Breast", "Chicken Thigh",
            "Chicken Wing", "Whole Turkey", "Duck", "Shrimp", "Salmon", "Cod", "Tuna", "Anchovy",
            "Clam", "Squid", "Crab", "Tofu", "Lamb", "Liver", "Sirloin Steak", "Pork",
        ],
    ),
    (
        "Produce",
        &[
            "Onion", "Red Onion", "Garlic", "Ginger", "Scallion", "Shallot", "Lemongrass", "Celery",
            "Carrot", "Bell Pepper", "Jalapeño", "Poblano", "Serrano Pepper", "Bird’s Eye Chili",
            "Roma Tomato", "Tomatillo", "Russet Potato", "Cabbage", "Bok Choy", "Broccoli",
            "Cauliflower", "Corn", "Button Mushroom", "Shiitake Mushroom", "Eggplant", "Zucchini",
            "Cucumber", "Spinach", "Kale", "Green Bean", "Snow Pea", "Asparagus", "Radish",
            "Bean Sprout", "Avocado", "Lime", "Lemon", "Apple", "Mango", "Pineapple", "Coconut",
            "Tamarind", "Fresh Basil", "Thai Basil", "Holy Basil", "Cilantro", "Parsley", "Dill",
            "Chives", "Mint", "Green Pea", "Portabella Mushroom", "Mushrooms", "Potatoes",
            "Red Pepper",
        ],
    ),
    (
        "Pantry",
        &[
            "Dried Ancho Chili", "Dried Red Chili", "Jasmine Rice", "White Rice", "Brown Rice",
            "Arborio Rice", "Sticky Rice", "Gnocchi", "Pasta", "Egg Noodle", "Rice Noodle",
            "Glass Noodle", "Corn Tortilla", "Flour Tortilla", "White Bread", "Rye Bread",
            "Breadcrumbs", "Cornmeal", "Masa Harina", "Oats", "All-Purpose Flour", "Cornstarch",
            "Potato Starch", "Baking Powder", "Baking Soda", "Yeast", "Chicken Stock", "Beef Stock",
            "Chicken Broth", "Canned San Marzano Tomato", "Tomato Paste", "Tomato Sauce",
            "Coconut Milk", "Coconut Cream", "Pickle", "Sauerkraut", "Capers", "Black Olive",
            "Peanut Butter", "Roasted Peanut", "Walnut", "Pine Nut", "Almond", "Vegetable Oil",
            "Canola Oil", "Olive Oil", "Lard", "Sesame Oil", "Peanut Oil", "Coconut Oil",
            "White Vinegar", "Apple Cider Vinegar", "Balsamic Vinegar", "Red Wine Vinegar",
            "Rice Vinegar", "Rice Wine Vinegar", "Black Vinegar", "Honey", "Maple Syrup", "Sugar",
            "Brown Sugar", "Palm Sugar", "Semi-sweet Chocolate", "Cocoa Powder", "Vanilla Extract",
            "Powdered Sugar", "Gelatin", "Chicken Bouillon", "Lasagna Sheet", "Taco Shell",
            "Tortilla Chip", "Sesame Seed", "Dried Cranberry", "Almond Flour", "Molasses",
            "Agave Nectar", "Cream of Chicken Soup", "Cream of Mushroom Soup", "Pimentos",
            "Beef Bouillon", "Noodles", "Diced Tomatoes", "Spaghetti", "Rice", "Long Grain Rice",
        ],
    ),
    (
        "Dairy",
        &[
            "Whole Milk", "Heavy Cream", "Sour Cream", "Yogurt", "Buttermilk", "Condensed Milk",
            "Evaporated Milk", "Cheddar Cheese", "Low Moisture Mozzarella", "Fresh Mozzarella",
            "Parmesan Cheese", "Ricotta Cheese", "Provolone Cheese", "Monterey Jack Cheese",
            "Queso Fresco", "Cotija Cheese", "Oaxaca Cheese", "Swiss Cheese", "Cream Cheese",
            "Gouda Cheese", "Butter", "Egg", "Milk",
        ],
    ),
    (
        "Sauces",
        &[
            "Soy Sauce", "Dark Soy Sauce", "Oyster Sauce", "Fish Sauce", "Hoisin Sauce",
            "Chili Garlic Sauce", "Sriracha", "Worcestershire Sauce", "Ketchup", "Yellow Mustard",
            "Dijon Mustard", "Mayonnaise", "BBQ Sauce", "Hot Sauce", "Salsa", "Mole Paste",
            "Red Curry Paste", "Green Curry Paste", "Shrimp Paste", "Tamarind Paste",
            "Broad Bean Paste", "Miso", "Sweet Chili Sauce", "Plum Sauce", "Black Bean Sauce",
            "Ranch Dressing", "Blue Cheese Dressing", "Caesar Dressing", "Horseradish",
            "Enchilada Sauce",
        ],
    ),
    (
        "Seasonings",
        &[
            "Salt", "Black Pepper", "White Pepper", "Cumin", "Chili Powder", "Sweet Paprika",
            "Smoked Paprika", "Cayenne Pepper", "Red Pepper Flake", "Mexican Oregano",
            "Dried Oregano", "Dried Basil", "Thyme", "Rosemary", "Sage", "Bay Leaf", "Cinnamon",
            "Nutmeg", "Clove", "Allspice", "Caraway Seed", "Fennel Seed", "Ground Coriander",
            "Turmeric", "Star Anise", "Sichuan Peppercorn", "Five Spice Powder", "Garlic Powder",
            "Onion Powder", "MSG", "Curry Powder", "Italian Seasoning", "Taco Seasoning", "Saffron",
            "Pepper",
        ],
    ),
    (
        "Other",
        &["Red Wine", "White Wine", "Shaoxing Wine", "Beer", "Sherry", "Water"],
    ),
];
