//! Russian strings.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Главная"),
    ("nav.schedule", "Расписание"),
    ("nav.clubs", "Клубы"),
    ("nav.profile", "Профиль"),
    // Home Page
    ("home.greeting", "Привет,"),
    ("home.user.description", "Добро пожаловать в UniLink, вашу студенческую платформу"),
    ("home.schedule.title", "Расписание на сегодня"),
    ("home.schedule.view_all", "Смотреть все"),
    ("home.schedule.empty_title", "Всё свободно!"),
    ("home.schedule.empty_text", "На сегодня у вас нет запланированных занятий."),
    ("home.news.title", "Последние новости"),
    // Schedule Page
    ("schedule.page_title", "Ваше расписание"),
    ("schedule.add_appointment", "Добавить"),
    ("schedule.day.monday", "Понедельник"),
    ("schedule.day.tuesday", "Вторник"),
    ("schedule.day.wednesday", "Среда"),
    ("schedule.day.thursday", "Четверг"),
    ("schedule.day.friday", "Пятница"),
    ("schedule.day.saturday", "Суббота"),
    ("schedule.day.sunday", "Воскресенье"),
    ("schedule.day.monday_abbr", "Пн"),
    ("schedule.day.tuesday_abbr", "Вт"),
    ("schedule.day.wednesday_abbr", "Ср"),
    ("schedule.day.thursday_abbr", "Чт"),
    ("schedule.day.friday_abbr", "Пт"),
    ("schedule.day.saturday_abbr", "Сб"),
    ("schedule.day.sunday_abbr", "Вс"),
    ("schedule.type.lecture", "Лекция"),
    ("schedule.type.seminar", "Семинар"),
    ("schedule.type.lab", "Лабораторная"),
    ("schedule.empty_text", "Нет занятий на"),
    ("schedule.edit", "Редактировать"),
    ("schedule.delete", "Удалить"),
    // Appointment Dialog
    ("dialog.appointment.add_title", "Добавить занятие"),
    ("dialog.appointment.add_description", "Заполните данные, чтобы добавить новое занятие."),
    ("dialog.appointment.edit_title", "Редактировать занятие"),
    ("dialog.appointment.edit_description", "Обновите данные вашего занятия."),
    ("dialog.appointment.course_label", "Курс"),
    ("dialog.appointment.course_placeholder", "например, Введение в ИИ"),
    ("dialog.appointment.professor_label", "Преподаватель"),
    ("dialog.appointment.professor_placeholder", "например, д-р Алан Тьюринг"),
    ("dialog.appointment.room_label", "Аудитория"),
    ("dialog.appointment.room_placeholder", "например, аудитория 305"),
    ("dialog.appointment.start_time_label", "Время начала"),
    ("dialog.appointment.end_time_label", "Время окончания"),
    ("dialog.appointment.day_label", "День"),
    ("dialog.appointment.day_placeholder", "Выберите день"),
    ("dialog.appointment.type_label", "Тип"),
    ("dialog.appointment.type_placeholder", "Выберите тип"),
    ("dialog.appointment.add_button", "Добавить занятие"),
    ("dialog.appointment.save_button", "Сохранить изменения"),
    // Delete Dialog
    ("dialog.delete.title", "Вы уверены?"),
    ("dialog.delete.description", "Это действие нельзя отменить. Занятие будет навсегда удалено из вашего расписания."),
    ("dialog.delete.cancel", "Отмена"),
    ("dialog.delete.confirm", "Удалить"),
    // Clubs Page
    ("clubs.page_title", "Клубы"),
    ("clubs.page_description", "Находите студенческие клубы и вступайте в них."),
    ("clubs.add_club", "Добавить клуб"),
    ("clubs.no_clubs_title", "Клубы не найдены"),
    ("clubs.no_clubs_description", "Добавьте новый клуб, чтобы начать."),
    ("dialog.club.add_title", "Новый клуб"),
    ("dialog.club.add_description", "Заполните данные ниже, чтобы добавить новый клуб."),
    ("dialog.club.name_label", "Название клуба"),
    ("dialog.club.name_placeholder", "Дебатный клуб"),
    ("dialog.club.description_label", "Описание"),
    ("dialog.club.description_placeholder", "Клуб для..."),
    ("dialog.club.save_button", "Сохранить клуб"),
    // Clients Page
    ("clients.page_title", "Клиенты"),
    ("clients.page_description", "Управление профилями и данными клиентов."),
    ("clients.add_client", "Добавить клиента"),
    ("clients.no_clients_title", "Клиенты не найдены"),
    ("clients.no_clients_description", "Добавьте нового клиента, чтобы начать."),
    ("dialog.client.add_title", "Новый клиент"),
    ("dialog.client.add_description", "Заполните данные ниже, чтобы добавить нового клиента."),
    ("dialog.client.name_label", "Имя"),
    ("dialog.client.name_placeholder", "Иван Иванов"),
    ("dialog.client.email_label", "Электронная почта"),
    ("dialog.client.email_placeholder", "john.doe@example.com"),
    ("dialog.client.university_label", "Университет"),
    ("dialog.client.university_placeholder", "Государственный университет"),
    ("dialog.client.save_button", "Сохранить клиента"),
    // Profile Page
    ("profile.page_title", "Мой профиль"),
    ("profile.page_description", "Ваши личные и академические данные."),
    ("profile.edit_button", "Редактировать профиль"),
    ("profile.email_label", "Адрес электронной почты"),
    ("profile.university_label", "Университет"),
    ("profile.faculty_label", "Факультет"),
    ("profile.course_label", "Курс"),
    ("profile.group_label", "Группа"),
    ("profile.edit_title", "Редактировать профиль"),
    ("profile.edit_description", "Обновите свои личные и академические данные."),
    ("profile.name_label", "Полное имя"),
    ("profile.description_label", "Описание"),
    ("profile.cancel_button", "Отмена"),
    ("profile.save_button", "Сохранить изменения"),
    ("profile.update_toast_title", "Профиль обновлён"),
    ("profile.update_toast_description", "Ваши данные успешно сохранены."),
    // Validation messages
    ("zod.course.min", "Название курса должно содержать не менее 2 символов."),
    ("zod.professor.min", "Имя преподавателя должно содержать не менее 2 символов."),
    ("zod.room.min", "Укажите аудиторию."),
    ("zod.time.invalid", "Неверный формат времени (ЧЧ:ММ)."),
    ("zod.club.name.min", "Название клуба должно содержать не менее 2 символов."),
    ("zod.club.description.min", "Описание слишком короткое."),
    ("zod.client.name.min", "Имя должно содержать не менее 2 символов."),
    ("zod.client.email.invalid", "Неверный адрес электронной почты."),
    ("zod.client.university.min", "Укажите университет."),
    ("zod.profile.name.min", "Имя слишком короткое."),
    ("zod.profile.description.min", "Описание слишком короткое."),
    ("zod.profile.email.invalid", "Неверный адрес электронной почты."),
    ("zod.profile.university.min", "Название университета слишком короткое."),
    ("zod.profile.faculty.min", "Название факультета слишком короткое."),
    ("zod.profile.course.min", "Курс должен быть не меньше 1."),
    ("zod.profile.course.max", "Курс должен быть не больше 7."),
    ("zod.profile.group.min", "Название группы слишком короткое."),
    ("zod.day.invalid", "Выберите день недели."),
    ("zod.type.invalid", "Выберите тип занятия."),
    ("zod.club.avatar_url.invalid", "Неверная ссылка на изображение."),
];
