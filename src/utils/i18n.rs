// ============================================================================
// I18N - ENG/UKR dictionaries
// ============================================================================

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::context::language::Language;

lazy_static! {
    static ref ENGLISH: HashMap<&'static str, &'static str> = HashMap::from([
        // Header / navigation
        ("app_title", "MedMobile"),
        ("home_header", "Home"),
        ("login_header", "Login"),
        ("register_header", "Register"),
        ("profile_header", "Profile"),
        ("medicine_header", "Medicines"),
        ("cart_header", "Cart"),
        ("my_orders_header", "My orders"),
        ("deliverer_header", "Deliverer"),
        ("machines_header", "Machines"),
        ("language_label", "Language"),
        ("menu_btn", "Menu"),
        ("footer_text", "MedMobile. Medicines delivered by smart machines."),
        // Home / 404
        ("home_title", "Order medicines and pick them up nearby"),
        ("home_subtitle", "Browse the catalog, fill your cart and choose a pickup point."),
        ("not_found_title", "Page not found"),
        ("back_home_btn", "Back to home"),
        // Auth
        ("login_title", "Sign in"),
        ("login_cta", "Don't have an account? Register"),
        ("username_input", "Email"),
        ("password_input", "Password"),
        ("submit_btn", "Submit"),
        ("login_success", "Signed in"),
        ("login_fail", "Wrong email or password"),
        ("fill_all_fields_error", "Please fill in all fields"),
        ("register_title", "Create account"),
        ("register_success", "Account created"),
        ("register_fail", "Registration failed"),
        ("firstname_input", "First name"),
        ("lastname_input", "Last name"),
        ("email_input", "Email"),
        ("birthdate_input", "Birthdate"),
        ("is_deliverer_input", "I am a deliverer"),
        ("role_input", "Role"),
        ("session_expired", "Session expired, please sign in again"),
        // Roles
        ("role_customer", "Customer"),
        ("role_deliverer", "Deliverer"),
        ("role_admin", "Admin"),
        // Medicines
        ("title_medicines", "Medicines"),
        ("search_substring_input", "Search by name"),
        ("prescriptions_needed_label", "Prescription needed"),
        ("any", "Any"),
        ("y", "Yes"),
        ("n", "No"),
        ("order_by_name_label", "Order by name"),
        ("order_by_ascending", "Ascending"),
        ("order_by_descending", "Descending"),
        ("search_btn", "Search"),
        ("previous_btn", "Previous"),
        ("next_btn", "Next"),
        ("fetch_medicines_error", "Could not load medicines"),
        ("no_medicines_msg", "No medicines found"),
        ("title_add_to_cart", "Add to cart"),
        ("quantity_label", "Quantity"),
        ("add_btn", "Add"),
        ("cancel_btn", "Cancel"),
        ("add_cart_medicine_success", "Added to cart"),
        ("price_label", "Price"),
        ("unavailable_label", "Unavailable"),
        // Cart
        ("title_cart", "Cart"),
        ("cart_column_name", "Name"),
        ("cart_column_price", "Price"),
        ("cart_column_count", "Count"),
        ("cart_column_actions", "Actions"),
        ("cart_no_items_msg", "Your cart is empty"),
        ("cart_pickup_point_text", "Pickup point:"),
        ("cart_machine_text", "Machine (optional):"),
        ("cart_total_price_text", "Total price:"),
        ("change_btn", "Change"),
        ("delete_btn", "Delete"),
        ("create_order_btn", "Create order"),
        ("create_order_success", "Order created"),
        ("create_order_error", "Could not create order"),
        ("choose_pickup_point_header", "Choose a pickup point"),
        ("select_pickup_point_success", "Pickup point selected"),
        ("pickup_points_fetch_error", "Could not load pickup points"),
        ("unselected_pickup_point_error", "Select a pickup point first"),
        ("choose_machine_header", "Choose a machine"),
        ("choose_machine_success", "Machine selected"),
        ("clear_selection_btn", "Clear selection"),
        ("fetch_machines_error", "Could not load machines"),
        // Profile
        ("profile_title", "Profile"),
        ("edit_profile_btn", "Edit profile"),
        ("save_btn", "Save"),
        ("logout_btn", "Log out"),
        ("logout_success", "Signed out"),
        ("change_pwd_btn", "Change password"),
        ("change_pwd_header", "Change password"),
        ("new_pwd_input", "New password"),
        ("new_pwd_confirmation_input", "Confirm new password"),
        ("pwds_not_matching_error", "Passwords do not match"),
        ("pwd_change_success", "Password changed"),
        ("pwd_change_error", "Could not change password"),
        ("user_data_fetch_fail", "Could not load your profile"),
        ("user_update_success", "Profile updated"),
        ("user_update_error", "Could not update profile"),
        // Orders
        ("title_order_history", "Order history"),
        ("fetch_orders_error", "Could not load orders"),
        ("no_orders_msg", "No orders yet"),
        ("get_order_by_id_error", "Could not load order"),
        ("order_details_header", "Order details"),
        ("id_label", "ID"),
        ("status_label", "Status"),
        ("created_at_label", "Created at"),
        ("updated_at_label", "Updated at"),
        ("medicines_label", "Medicines"),
        ("count_label", "Count"),
        ("name_label", "Name"),
        ("pickup_point_label", "Pickup point"),
        ("country_label", "Country"),
        ("address_label", "Address"),
        ("machine_label", "Machine"),
        ("arrival_at_label", "Arrival at"),
        ("close_btn", "Close"),
        ("order_status_created", "Created"),
        ("order_status_accounted", "Accounted"),
        ("order_status_in_preparing", "In preparing"),
        ("order_status_in_delivery", "In delivery"),
        ("order_status_completed", "Completed"),
        ("order_status_canceled", "Canceled"),
        ("order_status_failed", "Failed"),
        // Machines
        ("title_machines", "Machines"),
        ("no_machines_msg", "No machines found"),
        ("location_label", "Location"),
        ("last_maintenance_label", "Last maintenance"),
        ("machine_status_unregistered", "Unregistered"),
        ("machine_status_registered", "Registered"),
        ("machine_status_dysfunctional", "Dysfunctional"),
        // Generic
        ("loading", "Loading..."),
        ("network_error", "Network error, try again"),
    ]);

    static ref UKRAINIAN: HashMap<&'static str, &'static str> = HashMap::from([
        ("home_header", "Головна"),
        ("login_header", "Вхід"),
        ("register_header", "Реєстрація"),
        ("profile_header", "Профіль"),
        ("medicine_header", "Ліки"),
        ("cart_header", "Кошик"),
        ("my_orders_header", "Мої замовлення"),
        ("deliverer_header", "Кур'єр"),
        ("machines_header", "Автомати"),
        ("language_label", "Мова"),
        ("menu_btn", "Меню"),
        ("footer_text", "MedMobile. Ліки з доставкою розумними автоматами."),
        ("home_title", "Замовляйте ліки та забирайте поруч"),
        ("home_subtitle", "Перегляньте каталог, наповніть кошик і оберіть пункт видачі."),
        ("not_found_title", "Сторінку не знайдено"),
        ("back_home_btn", "На головну"),
        ("login_title", "Вхід"),
        ("login_cta", "Немає акаунта? Зареєструйтесь"),
        ("username_input", "Електронна пошта"),
        ("password_input", "Пароль"),
        ("submit_btn", "Надіслати"),
        ("login_success", "Ви увійшли"),
        ("login_fail", "Невірна пошта або пароль"),
        ("fill_all_fields_error", "Заповніть усі поля"),
        ("register_title", "Створити акаунт"),
        ("register_success", "Акаунт створено"),
        ("register_fail", "Не вдалося зареєструватися"),
        ("firstname_input", "Ім'я"),
        ("lastname_input", "Прізвище"),
        ("email_input", "Електронна пошта"),
        ("birthdate_input", "Дата народження"),
        ("is_deliverer_input", "Я кур'єр"),
        ("role_input", "Роль"),
        ("session_expired", "Сесія завершилась, увійдіть знову"),
        ("role_customer", "Покупець"),
        ("role_deliverer", "Кур'єр"),
        ("role_admin", "Адміністратор"),
        ("title_medicines", "Ліки"),
        ("search_substring_input", "Пошук за назвою"),
        ("prescriptions_needed_label", "Потрібен рецепт"),
        ("any", "Будь-які"),
        ("y", "Так"),
        ("n", "Ні"),
        ("order_by_name_label", "Сортувати за назвою"),
        ("order_by_ascending", "За зростанням"),
        ("order_by_descending", "За спаданням"),
        ("search_btn", "Шукати"),
        ("previous_btn", "Назад"),
        ("next_btn", "Далі"),
        ("fetch_medicines_error", "Не вдалося завантажити ліки"),
        ("no_medicines_msg", "Ліків не знайдено"),
        ("title_add_to_cart", "Додати до кошика"),
        ("quantity_label", "Кількість"),
        ("add_btn", "Додати"),
        ("cancel_btn", "Скасувати"),
        ("add_cart_medicine_success", "Додано до кошика"),
        ("price_label", "Ціна"),
        ("unavailable_label", "Немає в наявності"),
        ("title_cart", "Кошик"),
        ("cart_column_name", "Назва"),
        ("cart_column_price", "Ціна"),
        ("cart_column_count", "Кількість"),
        ("cart_column_actions", "Дії"),
        ("cart_no_items_msg", "Кошик порожній"),
        ("cart_pickup_point_text", "Пункт видачі:"),
        ("cart_machine_text", "Автомат (необов'язково):"),
        ("cart_total_price_text", "Загальна сума:"),
        ("change_btn", "Змінити"),
        ("delete_btn", "Видалити"),
        ("create_order_btn", "Оформити замовлення"),
        ("create_order_success", "Замовлення створено"),
        ("create_order_error", "Не вдалося створити замовлення"),
        ("choose_pickup_point_header", "Оберіть пункт видачі"),
        ("select_pickup_point_success", "Пункт видачі обрано"),
        ("pickup_points_fetch_error", "Не вдалося завантажити пункти видачі"),
        ("unselected_pickup_point_error", "Спочатку оберіть пункт видачі"),
        ("choose_machine_header", "Оберіть автомат"),
        ("choose_machine_success", "Автомат обрано"),
        ("clear_selection_btn", "Скинути вибір"),
        ("fetch_machines_error", "Не вдалося завантажити автомати"),
        ("profile_title", "Профіль"),
        ("edit_profile_btn", "Редагувати профіль"),
        ("save_btn", "Зберегти"),
        ("logout_btn", "Вийти"),
        ("logout_success", "Ви вийшли"),
        ("change_pwd_btn", "Змінити пароль"),
        ("change_pwd_header", "Зміна пароля"),
        ("new_pwd_input", "Новий пароль"),
        ("new_pwd_confirmation_input", "Підтвердіть новий пароль"),
        ("pwds_not_matching_error", "Паролі не збігаються"),
        ("pwd_change_success", "Пароль змінено"),
        ("pwd_change_error", "Не вдалося змінити пароль"),
        ("user_data_fetch_fail", "Не вдалося завантажити профіль"),
        ("user_update_success", "Профіль оновлено"),
        ("user_update_error", "Не вдалося оновити профіль"),
        ("title_order_history", "Історія замовлень"),
        ("fetch_orders_error", "Не вдалося завантажити замовлення"),
        ("no_orders_msg", "Замовлень ще немає"),
        ("get_order_by_id_error", "Не вдалося завантажити замовлення"),
        ("order_details_header", "Деталі замовлення"),
        ("status_label", "Статус"),
        ("created_at_label", "Створено"),
        ("updated_at_label", "Оновлено"),
        ("medicines_label", "Ліки"),
        ("count_label", "Кількість"),
        ("name_label", "Назва"),
        ("pickup_point_label", "Пункт видачі"),
        ("country_label", "Країна"),
        ("address_label", "Адреса"),
        ("machine_label", "Автомат"),
        ("arrival_at_label", "Прибуття"),
        ("close_btn", "Закрити"),
        ("order_status_created", "Створено"),
        ("order_status_accounted", "Оплачено"),
        ("order_status_in_preparing", "Готується"),
        ("order_status_in_delivery", "Доставляється"),
        ("order_status_completed", "Виконано"),
        ("order_status_canceled", "Скасовано"),
        ("order_status_failed", "Помилка"),
        ("title_machines", "Автомати"),
        ("no_machines_msg", "Автоматів не знайдено"),
        ("location_label", "Розташування"),
        ("last_maintenance_label", "Останнє обслуговування"),
        ("machine_status_unregistered", "Не зареєстровано"),
        ("machine_status_registered", "Зареєстровано"),
        ("machine_status_dysfunctional", "Несправний"),
        ("loading", "Завантаження..."),
        ("network_error", "Помилка мережі, спробуйте ще раз"),
    ]);
}

fn dictionary(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::English => &ENGLISH,
        Language::Ukrainian => &UKRAINIAN,
    }
}

/// Looks `key` up in `language`, then in English, then returns the key itself
pub fn t(key: &str, language: Language) -> &str {
    dictionary(language)
        .get(key)
        .or_else(|| ENGLISH.get(key))
        .copied()
        .unwrap_or(key)
}
