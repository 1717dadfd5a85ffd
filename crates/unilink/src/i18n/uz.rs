//! Uzbek strings.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Asosiy"),
    ("nav.schedule", "Jadval"),
    ("nav.clubs", "Klublar"),
    ("nav.profile", "Profil"),
    // Home Page
    ("home.greeting", "Salom,"),
    ("home.user.description", "UniLink-ga xush kelibsiz, sizning talabalar platformangiz"),
    ("home.schedule.title", "Bugungi jadval"),
    ("home.schedule.view_all", "Barchasini ko'rish"),
    ("home.schedule.empty_title", "Hammasi toza!"),
    ("home.schedule.empty_text", "Bugun uchun rejalashtirilgan darslaringiz yo'q."),
    ("home.news.title", "So'nggi yangiliklar"),
    // Schedule Page
    ("schedule.page_title", "Sizning jadvalingiz"),
    ("schedule.add_appointment", "Qo'shish"),
    ("schedule.day.monday", "Dushanba"),
    ("schedule.day.tuesday", "Seshanba"),
    ("schedule.day.wednesday", "Chorshanba"),
    ("schedule.day.thursday", "Payshanba"),
    ("schedule.day.friday", "Juma"),
    ("schedule.day.saturday", "Shanba"),
    ("schedule.day.sunday", "Yakshanba"),
    ("schedule.day.monday_abbr", "Du"),
    ("schedule.day.tuesday_abbr", "Se"),
    ("schedule.day.wednesday_abbr", "Cho"),
    ("schedule.day.thursday_abbr", "Pa"),
    ("schedule.day.friday_abbr", "Ju"),
    ("schedule.day.saturday_abbr", "Sha"),
    ("schedule.day.sunday_abbr", "Ya"),
    ("schedule.type.lecture", "Maruza"),
    ("schedule.type.seminar", "Seminar"),
    ("schedule.type.lab", "Lab. ishi"),
    ("schedule.empty_text", "uchun darslar yo'q"),
    ("schedule.edit", "Tahrirlash"),
    ("schedule.delete", "O'chirish"),
    // Appointment Dialog
    ("dialog.appointment.add_title", "Yangi yozuv qo'shish"),
    ("dialog.appointment.add_description", "Yangi dars qo'shish uchun ma'lumotlarni to'ldiring."),
    ("dialog.appointment.edit_title", "Yozuvni tahrirlash"),
    ("dialog.appointment.edit_description", "Darsingiz ma'lumotlarini yangilang."),
    ("dialog.appointment.course_label", "Kurs"),
    ("dialog.appointment.course_placeholder", "masalan, Sun'iy intellektga kirish"),
    ("dialog.appointment.professor_label", "O'qituvchi"),
    ("dialog.appointment.professor_placeholder", "masalan, Dr. Alan Turing"),
    ("dialog.appointment.room_label", "Xona / Kabinet"),
    ("dialog.appointment.room_placeholder", "masalan, 305-xona"),
    ("dialog.appointment.start_time_label", "Boshlanish vaqti"),
    ("dialog.appointment.end_time_label", "Tugash vaqti"),
    ("dialog.appointment.day_label", "Kun"),
    ("dialog.appointment.day_placeholder", "Kunni tanlang"),
    ("dialog.appointment.type_label", "Turi"),
    ("dialog.appointment.type_placeholder", "Turni tanlang"),
    ("dialog.appointment.add_button", "Yozuvni qo'shish"),
    ("dialog.appointment.save_button", "O'zgarishlarni saqlash"),
    // Delete Dialog
    ("dialog.delete.title", "Ishonchingiz komilmi?"),
    ("dialog.delete.description", "Bu amalni bekor qilib bo'lmaydi. Yozuv sizning jadvalingizdan butunlay o'chiriladi."),
    ("dialog.delete.cancel", "Bekor qilish"),
    ("dialog.delete.confirm", "O'chirish"),
    // Clubs Page
    ("clubs.page_title", "Klublar"),
    ("clubs.page_description", "Talabalar klublarini toping va ularga qo'shiling."),
    ("clubs.add_club", "Klub qo'shish"),
    ("clubs.no_clubs_title", "Klublar topilmadi"),
    ("clubs.no_clubs_description", "Boshlash uchun yangi klub qo'shing."),
    ("dialog.club.add_title", "Yangi klub qo'shish"),
    ("dialog.club.add_description", "Yangi klub qo'shish uchun quyidagi ma'lumotlarni to'ldiring."),
    ("dialog.club.name_label", "Klub nomi"),
    ("dialog.club.name_placeholder", "Debat klubi"),
    ("dialog.club.description_label", "Tavsif"),
    ("dialog.club.description_placeholder", "uchun klub..."),
    ("dialog.club.save_button", "Klubni saqlash"),
    // Clients Page
    ("clients.page_title", "Mijozlar"),
    ("clients.page_description", "Mijozlarning profillari va ma'lumotlarini boshqarish."),
    ("clients.add_client", "Mijoz qo'shish"),
    ("clients.no_clients_title", "Mijozlar topilmadi"),
    ("clients.no_clients_description", "Boshlash uchun yangi mijoz qo'shing."),
    ("dialog.client.add_title", "Yangi mijoz qo'shish"),
    ("dialog.client.add_description", "Yangi mijoz qo'shish uchun quyidagi ma'lumotlarni to'ldiring."),
    ("dialog.client.name_label", "Ism"),
    ("dialog.client.name_placeholder", "John Doe"),
    ("dialog.client.email_label", "Elektron pochta"),
    ("dialog.client.email_placeholder", "john.doe@example.com"),
    ("dialog.client.university_label", "Universitet"),
    ("dialog.client.university_placeholder", "Davlat universiteti"),
    ("dialog.client.save_button", "Mijozni saqlash"),
    // Profile Page
    ("profile.page_title", "Mening profilim"),
    ("profile.page_description", "Sizning shaxsiy va akademik ma'lumotlaringiz."),
    ("profile.edit_button", "Profilni tahrirlash"),
    ("profile.email_label", "Elektron pochta manzili"),
    ("profile.university_label", "Universitet"),
    ("profile.faculty_label", "Fakultet"),
    ("profile.course_label", "Kurs"),
    ("profile.group_label", "Guruh"),
    ("profile.edit_title", "Profilni tahrirlash"),
    ("profile.edit_description", "Shaxsiy va akademik ma'lumotlaringizni yangilang."),
    ("profile.name_label", "To'liq ism"),
    ("profile.description_label", "Tavsif"),
    ("profile.cancel_button", "Bekor qilish"),
    ("profile.save_button", "O'zgarishlarni saqlash"),
    ("profile.update_toast_title", "Profil yangilandi"),
    ("profile.update_toast_description", "Sizning ma'lumotlaringiz muvaffaqiyatli saqlandi."),
    // Validation messages
    ("zod.course.min", "Kurs nomi kamida 2 ta belgidan iborat bo'lishi kerak."),
    ("zod.professor.min", "O'qituvchi ismi kamida 2 ta belgidan iborat bo'lishi kerak."),
    ("zod.room.min", "Xonani ko'rsatish talab etiladi."),
    ("zod.time.invalid", "Noto'g'ri vaqt formati (SS:QQ)."),
    ("zod.club.name.min", "Klub nomi kamida 2 ta belgidan iborat bo'lishi kerak."),
    ("zod.club.description.min", "Tavsif juda qisqa."),
    ("zod.client.name.min", "Ism kamida 2 ta belgidan iborat bo'lishi kerak."),
    ("zod.client.email.invalid", "Noto'g'ri elektron pochta manzili."),
    ("zod.client.university.min", "Universitet nomini ko'rsatish talab etiladi."),
    ("zod.profile.name.min", "Ism juda qisqa."),
    ("zod.profile.description.min", "Tavsif juda qisqa."),
    ("zod.profile.email.invalid", "Noto'g'ri elektron pochta manzili."),
    ("zod.profile.university.min", "Universitet nomi juda qisqa."),
    ("zod.profile.faculty.min", "Fakultet nomi juda qisqa."),
    ("zod.profile.course.min", "Kurs kamida 1 bo'lishi kerak."),
    ("zod.profile.course.max", "Kurs ko'pi bilan 7 bo'lishi kerak."),
    ("zod.profile.group.min", "Guruh nomi juda qisqa."),
    ("zod.day.invalid", "Hafta kunini tanlang."),
    ("zod.type.invalid", "Dars turini tanlang."),
    ("zod.club.avatar_url.invalid", "Noto'g'ri rasm havolasi."),
];
